//! Searching demonstrations.

use std::io::Write;

use anyhow::Result;

use algor_core::search::{AvlTree, BinarySearchTree, binary_search, linear_search};

use super::{Category, Demo};

fn report(out: &mut dyn Write, target: i32, found: Option<usize>) -> Result<()> {
    match found {
        Some(index) => writeln!(out, "{target} found at index {index}")?,
        None => writeln!(out, "{target} is not present")?,
    }
    Ok(())
}

fn show_keys(out: &mut dyn Write, label: &str, keys: &[&i32]) -> Result<()> {
    write!(out, "{label}:")?;
    for key in keys {
        write!(out, " {key}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Demonstrates [`linear_search`] on an unsorted array.
pub struct LinearSearchDemo;

impl Demo for LinearSearchDemo {
    fn name(&self) -> &'static str {
        "linear-search"
    }

    fn category(&self) -> Category {
        Category::Searching
    }

    fn complexity(&self) -> &'static str {
        "O(n)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let arr = [12, 11, 13, 5, 6];
        writeln!(out, "searching {arr:?}")?;
        report(out, 6, linear_search(&arr, &6))?;
        report(out, 7, linear_search(&arr, &7))
    }
}

/// Demonstrates [`binary_search`] on a sorted array.
pub struct BinarySearchDemo;

impl Demo for BinarySearchDemo {
    fn name(&self) -> &'static str {
        "binary-search"
    }

    fn category(&self) -> Category {
        Category::Searching
    }

    fn complexity(&self) -> &'static str {
        "O(log n)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let arr = [5, 6, 11, 12, 13];
        writeln!(out, "searching {arr:?}")?;
        report(out, 6, binary_search(&arr, &6))?;
        report(out, 7, binary_search(&arr, &7))
    }
}

/// Demonstrates [`BinarySearchTree`] insertion and the three deletion cases.
pub struct BstDemo;

impl Demo for BstDemo {
    fn name(&self) -> &'static str {
        "binary-search-tree"
    }

    fn category(&self) -> Category {
        Category::Searching
    }

    fn complexity(&self) -> &'static str {
        "average O(log n), worst O(n)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut bst = BinarySearchTree::new();
        for key in [50, 30, 20, 40, 70, 60, 80] {
            bst.insert(key);
        }
        show_keys(out, "in order", &bst.in_order())?;

        // Leaf, one-child, and two-child deletions in turn
        for key in [20, 30, 50] {
            bst.delete(&key);
            writeln!(out, "delete {key}")?;
            show_keys(out, "in order", &bst.in_order())?;
        }
        Ok(())
    }
}

/// Demonstrates [`AvlTree`] rebalancing on insert and delete.
pub struct AvlDemo;

impl Demo for AvlDemo {
    fn name(&self) -> &'static str {
        "avl-tree"
    }

    fn category(&self) -> Category {
        Category::Searching
    }

    fn complexity(&self) -> &'static str {
        "O(log n)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut tree = AvlTree::new();
        for key in [10, 50, 40, 25, 30, 20] {
            tree.insert(key)?;
        }
        show_keys(out, "preorder", &tree.pre_order())?;
        show_keys(out, "in order", &tree.in_order())?;
        writeln!(out, "height: {}", tree.height())?;

        tree.delete(&20);
        tree.delete(&40);
        writeln!(out, "after deleting 20 and 40")?;
        show_keys(out, "in order", &tree.in_order())?;
        writeln!(out, "height: {}", tree.height())?;
        Ok(())
    }
}
