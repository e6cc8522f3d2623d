//! Graph traversals: BFS and DFS with a visitor pattern.
//!
//! Both traversals report progress through [`TraversalEvent`]s to a visitor
//! callback, which steers the walk by returning a [`Control`]: keep going,
//! prune the current branch, or break out with a value. The plain
//! [`bfs`]/[`dfs`] entry points are thin visitors that just record order.

mod bfs;
mod dfs;
mod visitor;

pub use bfs::{bfs, bfs_layers, bfs_with_visitor};
pub use dfs::{dfs, dfs_post_order, dfs_with_visitor, topological_order};
pub use visitor::{Control, TraversalEvent};
