//! Weighted edge types.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A weighted directed edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    /// Creates a directed edge from `from` to `to` with the given weight.
    #[must_use]
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// The tail vertex (where the edge starts).
    #[inline]
    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    /// The head vertex (where the edge points).
    #[inline]
    #[must_use]
    pub fn to(&self) -> usize {
        self.to
    }

    /// The edge weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

/// A weighted undirected edge between two vertices.
///
/// The endpoints have no inherent order; use [`either`](Edge::either) to get
/// one endpoint and [`other`](Edge::other) to get the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    /// Creates an undirected edge between `v` and `w` with the given weight.
    #[must_use]
    pub fn new(v: usize, w: usize, weight: f64) -> Self {
        Self { v, w, weight }
    }

    /// One endpoint of the edge.
    #[inline]
    #[must_use]
    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint opposite `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not an endpoint of this edge.
    #[must_use]
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!("vertex {vertex} is not an endpoint of this edge")
        }
    }

    /// The edge weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialOrd for Edge {
    /// Edges compare by weight.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.2}", self.v, self.w, self.weight)
    }
}
