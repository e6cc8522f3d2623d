//! Edge-weighted graph models, directed and undirected.

use algor_common::containers::Bag;
use algor_common::{Error, Result};

use super::edge::{DirectedEdge, Edge};

/// An edge-weighted digraph of vertices `0..V`, stored as adjacency bags of
/// [`DirectedEdge`]s.
///
/// Uses O(V + E) space. Iterating the edges leaving a vertex takes time
/// proportional to its out-degree.
///
/// # Example
///
/// ```
/// use algor_core::graph::{DirectedEdge, EdgeWeightedDigraph};
///
/// let mut g = EdgeWeightedDigraph::new(3);
/// g.add_edge(DirectedEdge::new(0, 1, 0.5)).unwrap();
/// g.add_edge(DirectedEdge::new(1, 2, 0.25)).unwrap();
/// assert_eq!(g.e(), 2);
/// ```
pub struct EdgeWeightedDigraph {
    adj: Vec<Bag<DirectedEdge>>,
    in_degree: Vec<usize>,
    e: usize,
}

impl EdgeWeightedDigraph {
    /// Creates an edge-weighted digraph with `v` vertices and no edges.
    #[must_use]
    pub fn new(v: usize) -> Self {
        Self {
            adj: (0..v).map(|_| Bag::new()).collect(),
            in_degree: vec![0; v],
            e: 0,
        }
    }

    /// Builds a digraph from an edge list, sizing the vertex set to `v`.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge endpoint is out of range.
    pub fn from_edges(v: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut g = Self::new(v);
        for &(from, to, weight) in edges {
            g.add_edge(DirectedEdge::new(from, to, weight))?;
        }
        Ok(g)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn v(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn e(&self) -> usize {
        self.e
    }

    /// Adds a directed edge.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of range.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())?;
        self.in_degree[edge.to()] += 1;
        self.adj[edge.from()].add(edge);
        self.e += 1;
        Ok(())
    }

    /// Iterates over the edges leaving `v`, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn adj(&self, v: usize) -> Result<impl Iterator<Item = &DirectedEdge>> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter())
    }

    /// Iterates over every edge in the digraph.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.adj.iter().flat_map(Bag::iter)
    }

    /// Returns the out-degree of `v`.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Returns the in-degree of `v`.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn in_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.in_degree[v])
    }

    pub(crate) fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.v() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                max: self.v(),
            });
        }
        Ok(())
    }
}

/// An edge-weighted undirected graph of vertices `0..V`.
///
/// Each [`Edge`] appears in the adjacency bag of both endpoints (twice in the
/// same bag for a self-loop); [`edges`](EdgeWeightedGraph::edges) yields each
/// edge exactly once.
pub struct EdgeWeightedGraph {
    adj: Vec<Bag<Edge>>,
    e: usize,
}

impl EdgeWeightedGraph {
    /// Creates an edge-weighted graph with `v` vertices and no edges.
    #[must_use]
    pub fn new(v: usize) -> Self {
        Self {
            adj: (0..v).map(|_| Bag::new()).collect(),
            e: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn v(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn e(&self) -> usize {
        self.e
    }

    /// Adds an undirected edge.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of range.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let v = edge.either();
        let w = edge.other(v);
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adj[v].add(edge);
        self.adj[w].add(edge);
        self.e += 1;
        Ok(())
    }

    /// Iterates over the edges incident to `v`.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn adj(&self, v: usize) -> Result<impl Iterator<Item = &Edge>> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter())
    }

    /// Returns the degree of `v` (self-loops count twice).
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Collects every edge exactly once.
    ///
    /// Each edge lives in two adjacency bags; taking only the copies where
    /// `other(v) >= v` - and every second copy for self-loops - yields each
    /// once.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut all = Vec::with_capacity(self.e);
        for v in 0..self.v() {
            let mut self_loops = 0;
            for edge in self.adj[v].iter() {
                let w = edge.other(v);
                if w > v {
                    all.push(*edge);
                } else if w == v {
                    if self_loops % 2 == 0 {
                        all.push(*edge);
                    }
                    self_loops += 1;
                }
            }
        }
        all
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.v() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                max: self.v(),
            });
        }
        Ok(())
    }
}
