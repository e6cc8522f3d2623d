//! Visitor types shared by the traversals.

/// An event reported to a traversal visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A vertex was seen for the first time.
    Discover(usize),
    /// An edge to an undiscovered vertex (the traversal will follow it).
    TreeEdge {
        /// The vertex being explored.
        source: usize,
        /// The newly reached vertex.
        target: usize,
    },
    /// An edge to a vertex on the current DFS path (cycle witness; DFS only).
    BackEdge {
        /// The vertex being explored.
        source: usize,
        /// The ancestor vertex.
        target: usize,
    },
    /// An edge to an already-discovered vertex that is not an ancestor.
    NonTreeEdge {
        /// The vertex being explored.
        source: usize,
        /// The previously discovered vertex.
        target: usize,
    },
    /// All edges of a vertex have been processed.
    Finish(usize),
}

/// A visitor's verdict after each [`TraversalEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<B> {
    /// Continue the traversal normally.
    Continue,
    /// Skip exploring from the vertex or edge this event describes.
    Prune,
    /// Stop the traversal and return this value.
    Break(B),
}
