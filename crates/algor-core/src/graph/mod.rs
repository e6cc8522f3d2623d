//! Adjacency-list graph models.
//!
//! Vertices are dense indices `0..V`, fixed at construction; adjacency lists
//! are [`Bag`](algor_common::containers::Bag)s, so edge insertion is O(1) and
//! iteration over a vertex's edges is proportional to its degree. Parallel
//! edges and self-loops are permitted everywhere.
//!
//! - [`Digraph`] - unweighted directed graph
//! - [`EdgeWeightedDigraph`] - directed, real-valued edge weights
//! - [`EdgeWeightedGraph`] - undirected, real-valued edge weights
//! - [`EdgeWeightedDirectedCycle`] - DFS-based directed-cycle finder

mod cycle;
mod digraph;
mod edge;
mod weighted;

pub use cycle::EdgeWeightedDirectedCycle;
pub use digraph::Digraph;
pub use edge::{DirectedEdge, Edge};
pub use weighted::{EdgeWeightedDigraph, EdgeWeightedGraph};
