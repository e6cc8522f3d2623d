//! The demonstration registry.
//!
//! Each algorithm ships a [`Demo`] that reproduces its classic walkthrough
//! on a small fixed input, writing intermediate and final state to the given
//! writer. [`registry`] returns the demos in driver order: sorts, then
//! searches, then graph algorithms.

mod graph;
mod search;
mod sort;

use std::fmt;
use std::io::Write;

use algor_common::collections::AlgorIndexMap;
use anyhow::Result;
use serde::Serialize;

/// Algorithm category, used for grouping in `list` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Comparison sorts.
    Sorting,
    /// Slice and tree searches.
    Searching,
    /// Traversals and shortest paths.
    Graph,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorting => write!(f, "sorting"),
            Self::Searching => write!(f, "searching"),
            Self::Graph => write!(f, "graph"),
        }
    }
}

/// A self-contained algorithm demonstration.
pub trait Demo {
    /// Stable name, used for banners and `--only` filtering.
    fn name(&self) -> &'static str;

    /// The category this demo belongs to.
    fn category(&self) -> Category;

    /// Worst-case running time, for the `list` table.
    fn complexity(&self) -> &'static str;

    /// Writes the demonstration's output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the algorithm rejects its input.
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// Every demo keyed by name, in driver order: sorts, then searches, then
/// graph algorithms. The insertion-ordered map keeps `run` deterministic
/// while letting `--only` look demos up by name.
#[must_use]
pub fn registry() -> AlgorIndexMap<&'static str, Box<dyn Demo>> {
    let demos: [Box<dyn Demo>; 12] = [
        Box::new(sort::InsertionSortDemo),
        Box::new(sort::SelectionSortDemo),
        Box::new(sort::HeapSortDemo),
        Box::new(sort::QuickSortDemo),
        Box::new(sort::MergeSortDemo),
        Box::new(search::LinearSearchDemo),
        Box::new(search::BinarySearchDemo),
        Box::new(search::BstDemo),
        Box::new(search::AvlDemo),
        Box::new(graph::DfsDemo),
        Box::new(graph::BfsDemo),
        Box::new(graph::DijkstraDemo),
    ];
    demos.into_iter().map(|demo| (demo.name(), demo)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(demo: &dyn Demo) -> String {
        let mut buf: Vec<u8> = Vec::new();
        demo.run(&mut buf).expect("demo runs cleanly");
        String::from_utf8(buf).expect("demo output is UTF-8")
    }

    #[test]
    fn test_registry_covers_every_algorithm() {
        let demos = registry();
        assert_eq!(demos.len(), 12);

        // Driver order: sorts, then searches, then graph algorithms
        let categories: Vec<_> = demos.values().map(|d| d.category()).collect();
        let first_search = categories
            .iter()
            .position(|&c| c == Category::Searching)
            .unwrap();
        let first_graph = categories
            .iter()
            .position(|&c| c == Category::Graph)
            .unwrap();
        assert!(
            categories[..first_search]
                .iter()
                .all(|&c| c == Category::Sorting)
        );
        assert!(first_search < first_graph);
    }

    #[test]
    fn test_registry_keys_match_demo_names() {
        for (name, demo) in &registry() {
            assert_eq!(*name, demo.name());
        }
    }

    #[test]
    fn test_every_demo_produces_output() {
        for demo in registry().values() {
            let output = capture(demo.as_ref());
            assert!(!output.is_empty(), "{} wrote nothing", demo.name());
        }
    }

    #[test]
    fn test_sort_demos_show_sorted_result() {
        for demo in registry()
            .values()
            .filter(|d| d.category() == Category::Sorting)
        {
            let output = capture(demo.as_ref());
            assert!(
                output.contains("[5, 6, 11, 12, 13]"),
                "{} missing sorted array",
                demo.name()
            );
        }
    }

    #[test]
    fn test_dijkstra_demo_prints_documented_distances() {
        let demos = registry();
        let dijkstra = demos.get("dijkstra").unwrap();
        let output = capture(dijkstra.as_ref());
        assert!(output.contains("0 to 6 (1.51)"));
        assert!(output.contains("0 to 2 (0.26)"));
        assert!(output.contains("0->2 0.26"));
    }

    #[test]
    fn test_search_demos_report_hit_and_miss() {
        let demos = registry();
        for name in ["linear-search", "binary-search"] {
            let demo = demos.get(name).unwrap();
            let output = capture(demo.as_ref());
            assert!(output.contains("6 found at index"), "{name}");
            assert!(output.contains("7 is not present"), "{name}");
        }
    }
}
