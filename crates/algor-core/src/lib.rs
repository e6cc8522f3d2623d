//! Classic algorithms over in-memory arrays and adjacency lists.
//!
//! Everything here is a short, pure, single-threaded function or data type:
//!
//! - [`sort`] - Comparison sorts (insertion, selection, heap, quick, merge)
//! - [`search`] - Linear and binary search, plus BST and AVL ordered sets
//! - [`graph`] - Adjacency-list digraphs and edge-weighted graph models
//! - [`traverse`] - BFS and DFS with a visitor pattern and early termination
//! - [`shortest_path`] - Dijkstra's single-source shortest paths
//!
//! The containers and indexed priority queues these build on live in
//! [`algor_common`].

pub mod graph;
pub mod search;
pub mod shortest_path;
pub mod sort;
pub mod traverse;

pub use algor_common::{Error, Result};
