//! Shared foundations for the `algor` workspace.
//!
//! This crate holds everything the algorithm crates lean on but that has no
//! algorithmic content of its own:
//!
//! - [`containers`] - Generic stacks, queues, and bags in linked-list and
//!   resizing-array flavors
//! - [`pq`] - Indexed priority queues (min- and max-oriented binary heaps)
//! - [`collections`] - Hash map/set aliases with consistent, fast hashing
//! - [`utils`] - Error types and hashing helpers

pub mod collections;
pub mod containers;
pub mod pq;
pub mod utils;

pub use utils::error::{Error, Result};
