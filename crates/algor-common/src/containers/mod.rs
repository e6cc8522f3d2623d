//! Generic containers used by the algorithm crates.
//!
//! Each container comes in two flavors, matching the two classic
//! implementations:
//!
//! - a **resizing-array** variant that doubles its buffer when full and
//!   shrinks it at one-quarter occupancy, and
//! - a **linked-list** variant built from boxed nodes.
//!
//! | Container | Array variant | Linked variant | Order |
//! |-----------|---------------|----------------|-------|
//! | Stack | [`Stack`] | [`LinkedStack`] | LIFO |
//! | Queue | [`Queue`] | [`LinkedQueue`] | FIFO |
//! | Bag | [`ResizingArrayBag`] | [`Bag`] | unspecified |

mod bag;
mod queue;
mod stack;

pub use bag::{Bag, ResizingArrayBag};
pub use queue::{LinkedQueue, Queue};
pub use stack::{LinkedStack, Stack};
