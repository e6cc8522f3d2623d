//! Single-source shortest paths via Dijkstra's algorithm.

use log::debug;
use ordered_float::OrderedFloat;

use algor_common::containers::LinkedStack;
use algor_common::pq::IndexMinPq;
use algor_common::{Error, Result};

use crate::graph::{DirectedEdge, EdgeWeightedDigraph};

/// Shortest paths from a single source in an edge-weighted digraph with
/// nonnegative weights.
///
/// Construction runs Dijkstra's algorithm with a binary-heap
/// [`IndexMinPq`]: vertices are the queue handles, tentative distances the
/// keys, and each improving relaxation is a `decrease_key`. O((V + E) log V)
/// to build; every accessor is O(1) plus path length.
///
/// # Example
///
/// ```
/// use algor_core::graph::EdgeWeightedDigraph;
/// use algor_core::shortest_path::DijkstraShortestPaths;
///
/// let g = EdgeWeightedDigraph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 9.0)])
///     .unwrap();
/// let sp = DijkstraShortestPaths::new(&g, 0).unwrap();
/// assert_eq!(sp.dist_to(2).unwrap(), 5.0);
/// ```
#[derive(Debug)]
pub struct DijkstraShortestPaths {
    /// `dist_to[v]` = length of the shortest known source->v path.
    dist_to: Vec<f64>,
    /// `edge_to[v]` = last edge on the shortest source->v path.
    edge_to: Vec<Option<DirectedEdge>>,
}

impl DijkstraShortestPaths {
    /// Computes a shortest-path tree from `source` to every vertex of `g`.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge weight is negative or `source` is out of
    /// range.
    pub fn new(g: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        for e in g.edges() {
            if e.weight() < 0.0 {
                return Err(Error::NegativeWeight(e.to_string()));
            }
        }
        g.validate_vertex(source)?;

        let v = g.v();
        let mut sp = Self {
            dist_to: vec![f64::INFINITY; v],
            edge_to: vec![None; v],
        };
        sp.dist_to[source] = 0.0;

        debug!("dijkstra: {v} vertices, {} edges, source {source}", g.e());

        // Relax vertices in order of distance from the source
        let mut pq: IndexMinPq<OrderedFloat<f64>> = IndexMinPq::with_capacity(v);
        pq.insert(source, OrderedFloat(0.0))
            .expect("source validated");
        while let Some((vertex, _)) = pq.del_min() {
            for e in g.adj(vertex).expect("popped vertex in range") {
                sp.relax(e, &mut pq);
            }
        }

        debug_assert!(sp.check(g, source));
        Ok(sp)
    }

    /// Relaxes `e`, updating the queue if the path through it improves.
    fn relax(&mut self, e: &DirectedEdge, pq: &mut IndexMinPq<OrderedFloat<f64>>) {
        let v = e.from();
        let w = e.to();
        let candidate = self.dist_to[v] + e.weight();
        if self.dist_to[w] > candidate {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(*e);
            let key = OrderedFloat(candidate);
            if pq.contains(w).expect("edge endpoints in range") {
                pq.decrease_key(w, key).expect("relaxation only improves");
            } else {
                pq.insert(w, key).expect("w not on queue");
            }
        }
    }

    /// Returns the length of the shortest path from the source to `v`, or
    /// `f64::INFINITY` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn dist_to(&self, v: usize) -> Result<f64> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v])
    }

    /// Is `v` reachable from the source?
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v] < f64::INFINITY)
    }

    /// Returns the shortest path from the source to `v` as an edge sequence,
    /// or `None` if `v` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        // Walk edge_to root-ward, then pop the stack for source-first order
        let mut stack = LinkedStack::new();
        let mut edge = self.edge_to[v];
        while let Some(e) = edge {
            stack.push(e);
            edge = self.edge_to[e.from()];
        }
        let mut path = Vec::with_capacity(stack.len());
        while let Some(e) = stack.pop() {
            path.push(e);
        }
        Ok(Some(path))
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.dist_to.len() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                max: self.dist_to.len(),
            });
        }
        Ok(())
    }

    /// Certifies the optimality conditions:
    ///
    /// 1. `dist_to[source] == 0` with no incoming tree edge;
    /// 2. every edge `v->w` satisfies `dist_to[w] <= dist_to[v] + weight`
    ///    (all edges relaxed);
    /// 3. every tree edge `v->w` satisfies `dist_to[w] == dist_to[v] + weight`
    ///    (tree edges tight).
    fn check(&self, g: &EdgeWeightedDigraph, source: usize) -> bool {
        if self.dist_to[source] != 0.0 || self.edge_to[source].is_some() {
            return false;
        }
        for v in 0..g.v() {
            if v == source {
                continue;
            }
            if self.edge_to[v].is_none() && self.dist_to[v] != f64::INFINITY {
                return false;
            }
        }
        for e in g.edges() {
            if self.dist_to[e.from()] + e.weight() < self.dist_to[e.to()] {
                return false;
            }
        }
        for w in 0..g.v() {
            if let Some(e) = self.edge_to[w] {
                if e.to() != w || self.dist_to[e.from()] + e.weight() != self.dist_to[w] {
                    return false;
                }
            }
        }
        true
    }
}
