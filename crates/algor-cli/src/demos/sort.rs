//! Sorting demonstrations.

use std::io::Write;

use anyhow::Result;

use algor_core::sort::{heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

use super::{Category, Demo};

/// The classic demonstration input shared by every sort.
const DEMO_INPUT: [i32; 5] = [12, 11, 13, 5, 6];

fn show_sort(out: &mut dyn Write, sort: fn(&mut [i32])) -> Result<()> {
    let mut arr = DEMO_INPUT;
    writeln!(out, "before: {arr:?}")?;
    sort(&mut arr);
    writeln!(out, "after:  {arr:?}")?;
    Ok(())
}

/// Demonstrates [`insertion_sort`].
pub struct InsertionSortDemo;

impl Demo for InsertionSortDemo {
    fn name(&self) -> &'static str {
        "insertion-sort"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn complexity(&self) -> &'static str {
        "best O(n), average/worst O(n^2)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        show_sort(out, insertion_sort)
    }
}

/// Demonstrates [`selection_sort`].
pub struct SelectionSortDemo;

impl Demo for SelectionSortDemo {
    fn name(&self) -> &'static str {
        "selection-sort"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn complexity(&self) -> &'static str {
        "O(n^2)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        show_sort(out, selection_sort)
    }
}

/// Demonstrates [`heap_sort`].
pub struct HeapSortDemo;

impl Demo for HeapSortDemo {
    fn name(&self) -> &'static str {
        "heap-sort"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn complexity(&self) -> &'static str {
        "O(n log n)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        show_sort(out, heap_sort)
    }
}

/// Demonstrates [`quick_sort`].
pub struct QuickSortDemo;

impl Demo for QuickSortDemo {
    fn name(&self) -> &'static str {
        "quick-sort"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn complexity(&self) -> &'static str {
        "best/average O(n log n), worst O(n^2)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        show_sort(out, quick_sort)
    }
}

/// Demonstrates [`merge_sort`].
pub struct MergeSortDemo;

impl Demo for MergeSortDemo {
    fn name(&self) -> &'static str {
        "merge-sort"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn complexity(&self) -> &'static str {
        "O(n log n)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        show_sort(out, merge_sort)
    }
}
