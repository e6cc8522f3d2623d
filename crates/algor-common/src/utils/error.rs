//! Error types shared by the container and algorithm crates.
//!
//! Every fallible operation in the workspace returns [`Result`]. The original
//! invalid-argument conditions (out-of-range handles, duplicate insertions,
//! key-ordering violations) each get their own variant so callers can match on
//! exactly what went wrong.

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from containers, priority queues, graph models, and algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A priority-queue handle outside `0..capacity`.
    #[error("index {index} is not between 0 and {}", .max.saturating_sub(1))]
    IndexOutOfRange {
        /// The offending handle.
        index: usize,
        /// The queue capacity (valid handles are `0..max`).
        max: usize,
    },

    /// A graph vertex outside `0..V`.
    #[error("vertex {vertex} is not between 0 and {}", .max.saturating_sub(1))]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// The vertex count (valid vertices are `0..max`).
        max: usize,
    },

    /// Inserting a priority-queue handle that is already present.
    #[error("index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    /// A keyed operation on a handle with no associated key.
    #[error("index {0} is not in the priority queue")]
    IndexNotPresent(usize),

    /// `decrease_key`/`increase_key` called with a key that does not move in
    /// the required direction.
    #[error("{0}")]
    KeyOrder(&'static str),

    /// Inserting a key that is already in the tree.
    #[error("duplicate key")]
    DuplicateKey,

    /// An edge with negative weight where only nonnegative weights are valid.
    #[error("edge {0} has negative weight")]
    NegativeWeight(String),
}
