//! Searching: slice scans and ordered-set trees.
//!
//! - [`linear_search`] - O(n) scan of an arbitrary slice
//! - [`binary_search`] - O(log n) halving over a sorted slice
//! - [`BinarySearchTree`] - unbalanced ordered set; O(log n) average, O(n)
//!   worst case
//! - [`AvlTree`] - height-balanced ordered set; O(log n) worst case

mod avl;
mod binary;
mod bst;
mod linear;

pub use avl::AvlTree;
pub use binary::binary_search;
pub use bst::BinarySearchTree;
pub use linear::linear_search;
