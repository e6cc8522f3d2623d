//! Unweighted directed graph.

use algor_common::containers::Bag;
use algor_common::{Error, Result};

/// A directed graph of vertices `0..V`, stored as adjacency bags.
///
/// Uses O(V + E) space; `add_edge` is O(1) and iterating a vertex's
/// out-neighbors is proportional to its out-degree.
///
/// # Example
///
/// ```
/// use algor_core::graph::Digraph;
///
/// let mut g = Digraph::new(4);
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(0, 2).unwrap();
/// assert_eq!(g.out_degree(0).unwrap(), 2);
/// assert_eq!(g.in_degree(2).unwrap(), 1);
/// ```
pub struct Digraph {
    /// `adj[v]` holds the out-neighbors of `v`, most recently added first.
    adj: Vec<Bag<usize>>,
    /// `in_degree[v]` counts edges pointing at `v`.
    in_degree: Vec<usize>,
    /// Number of edges.
    e: usize,
}

impl Digraph {
    /// Creates a digraph with `v` vertices and no edges.
    #[must_use]
    pub fn new(v: usize) -> Self {
        Self {
            adj: (0..v).map(|_| Bag::new()).collect(),
            in_degree: vec![0; v],
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

    /// Adds the directed edge `v -> w`.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is out of range.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adj[v].add(w);
        self.in_degree[w] += 1;
        self.e += 1;
        Ok(())
    }

    /// Iterates over the out-neighbors of `v`, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is out of range.
    pub fn adj(&self, v: usize) -> Result<impl Iterator<Item = usize> + '_> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter().copied())
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

    /// Returns the reverse of this digraph (every edge flipped).
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.v());
        for v in 0..self.v() {
            for w in self.adj[v].iter() {
                reversed
                    .add_edge(*w, v)
                    .expect("endpoints valid in source digraph");
            }
        }
        reversed
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
