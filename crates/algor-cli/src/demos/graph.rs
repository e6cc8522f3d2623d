//! Graph demonstrations.

use std::io::Write;

use anyhow::Result;

use algor_core::graph::{Digraph, EdgeWeightedDigraph};
use algor_core::shortest_path::DijkstraShortestPaths;
use algor_core::traverse::{bfs, bfs_layers, dfs};

use super::{Category, Demo};

/// The 4-vertex digraph used by the traversal demonstrations:
/// 0->1, 0->2, 1->2, 2->0, 2->3, 3->3.
fn traversal_digraph() -> Result<Digraph> {
    let mut g = Digraph::new(4);
    for (v, w) in [(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)] {
        g.add_edge(v, w)?;
    }
    Ok(g)
}

/// The 8-vertex weighted sample digraph for Dijkstra.
fn weighted_digraph() -> Result<EdgeWeightedDigraph> {
    Ok(EdgeWeightedDigraph::from_edges(
        8,
        &[
            (4, 5, 0.35),
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )?)
}

fn show_order(out: &mut dyn Write, label: &str, order: &[usize]) -> Result<()> {
    write!(out, "{label}:")?;
    for v in order {
        write!(out, " {v}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Demonstrates depth-first search on the 4-vertex example.
pub struct DfsDemo;

impl Demo for DfsDemo {
    fn name(&self) -> &'static str {
        "depth-first-search"
    }

    fn category(&self) -> Category {
        Category::Graph
    }

    fn complexity(&self) -> &'static str {
        "O(V + E)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let g = traversal_digraph()?;
        show_order(out, "visit order from 2", &dfs(&g, 2)?)?;
        show_order(out, "visit order from 0", &dfs(&g, 0)?)
    }
}

/// Demonstrates breadth-first search and its distance layers.
pub struct BfsDemo;

impl Demo for BfsDemo {
    fn name(&self) -> &'static str {
        "breadth-first-search"
    }

    fn category(&self) -> Category {
        Category::Graph
    }

    fn complexity(&self) -> &'static str {
        "O(V + E)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let g = traversal_digraph()?;
        show_order(out, "visit order from 0", &bfs(&g, 0)?)?;
        for (distance, layer) in bfs_layers(&g, 0)?.iter().enumerate() {
            show_order(out, &format!("distance {distance}"), layer)?;
        }
        Ok(())
    }
}

/// Demonstrates Dijkstra's shortest paths from vertex 0, printing one line
/// per destination in the classic `s to t (dist) edges...` format.
pub struct DijkstraDemo;

impl Demo for DijkstraDemo {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn category(&self) -> Category {
        Category::Graph
    }

    fn complexity(&self) -> &'static str {
        "O((V + E) log V)"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let g = weighted_digraph()?;
        let source = 0;
        let sp = DijkstraShortestPaths::new(&g, source)?;

        for t in 0..g.v() {
            if sp.has_path_to(t)? {
                write!(out, "{source} to {t} ({:.2}) ", sp.dist_to(t)?)?;
                for e in sp.path_to(t)?.expect("path exists") {
                    write!(out, " {e}  ")?;
                }
                writeln!(out)?;
            } else {
                writeln!(out, "{source} to {t}         no path")?;
            }
        }
        Ok(())
    }
}
