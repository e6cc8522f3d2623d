//! Directed-cycle detection in edge-weighted digraphs.

use algor_common::containers::LinkedStack;

use super::edge::DirectedEdge;
use super::weighted::EdgeWeightedDigraph;

/// Determines whether an edge-weighted digraph has a directed cycle, and if
/// so produces one.
///
/// Runs depth-first search once at construction, O(V + E); the accessors are
/// O(1). `on_stack` marks the vertices of the current DFS path - an edge into
/// an on-stack vertex closes a cycle, which is then recovered by walking
/// `edge_to` back to that vertex.
pub struct EdgeWeightedDirectedCycle {
    /// Has vertex `v` been visited?
    marked: Vec<bool>,
    /// Previous edge on the path to `v`.
    edge_to: Vec<Option<DirectedEdge>>,
    /// Is vertex `v` on the current DFS path?
    on_stack: Vec<bool>,
    /// A directed cycle, in path order, if one exists.
    cycle: Option<Vec<DirectedEdge>>,
}

impl EdgeWeightedDirectedCycle {
    /// Searches `g` for a directed cycle.
    #[must_use]
    pub fn new(g: &EdgeWeightedDigraph) -> Self {
        let v = g.v();
        let mut finder = Self {
            marked: vec![false; v],
            edge_to: vec![None; v],
            on_stack: vec![false; v],
            cycle: None,
        };
        for vertex in 0..v {
            if !finder.marked[vertex] {
                finder.dfs(g, vertex);
            }
        }
        debug_assert!(finder.check());
        finder
    }

    /// Does the digraph have a directed cycle?
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle in path order, or `None` if the digraph is
    /// acyclic.
    #[must_use]
    pub fn cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }

    fn dfs(&mut self, g: &EdgeWeightedDigraph, v: usize) {
        self.on_stack[v] = true;
        self.marked[v] = true;
        let edges: Vec<DirectedEdge> = g
            .adj(v)
            .expect("vertex in range by construction")
            .copied()
            .collect();
        for e in edges {
            let w = e.to();

            // Short circuit if a cycle has already been found
            if self.cycle.is_some() {
                return;
            }
            if !self.marked[w] {
                self.edge_to[w] = Some(e);
                self.dfs(g, w);
            } else if self.on_stack[w] {
                // Trace the current path back to w to recover the cycle
                let mut stack = LinkedStack::new();
                let mut f = e;
                while f.from() != w {
                    stack.push(f);
                    f = self.edge_to[f.from()].expect("path edge recorded");
                }
                stack.push(f);
                let mut cycle = Vec::with_capacity(stack.len());
                while let Some(edge) = stack.pop() {
                    cycle.push(edge);
                }
                self.cycle = Some(cycle);
                return;
            }
        }
        self.on_stack[v] = false;
    }

    /// Certifies that a reported cycle is actually a cycle.
    fn check(&self) -> bool {
        if let Some(cycle) = &self.cycle {
            let first = match cycle.first() {
                Some(e) => e,
                None => return false,
            };
            let last = cycle.last().expect("nonempty cycle");
            if first.from() != last.to() {
                return false;
            }
            for pair in cycle.windows(2) {
                if pair[0].to() != pair[1].from() {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acyclic_digraph() {
        let g = EdgeWeightedDigraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 3, 1.0)])
            .unwrap();
        let finder = EdgeWeightedDirectedCycle::new(&g);
        assert!(!finder.has_cycle());
        assert!(finder.cycle().is_none());
    }

    #[test]
    fn test_finds_simple_cycle() {
        let g = EdgeWeightedDigraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)])
            .unwrap();
        let finder = EdgeWeightedDirectedCycle::new(&g);
        assert!(finder.has_cycle());

        let cycle = finder.cycle().unwrap();
        assert_eq!(cycle.len(), 3);
        // Consecutive edges chain, and the cycle closes
        for pair in cycle.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
        assert_eq!(cycle.last().unwrap().to(), cycle[0].from());
    }

    #[test]
    fn test_finds_self_loop() {
        let g = EdgeWeightedDigraph::from_edges(2, &[(0, 1, 1.0), (1, 1, 1.0)]).unwrap();
        let finder = EdgeWeightedDirectedCycle::new(&g);
        assert!(finder.has_cycle());
        assert_eq!(finder.cycle().unwrap().len(), 1);
    }

    #[test]
    fn test_cycle_reachable_only_from_later_root() {
        // The cycle sits in a component not reachable from vertex 0
        let g = EdgeWeightedDigraph::from_edges(
            5,
            &[(0, 1, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 2, 1.0)],
        )
        .unwrap();
        let finder = EdgeWeightedDirectedCycle::new(&g);
        assert!(finder.has_cycle());
    }
}
