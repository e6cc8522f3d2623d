//! Breadth-first search.

use std::collections::VecDeque;

use algor_common::collections::AlgorSet;
use algor_common::Result;

use crate::graph::Digraph;

use super::visitor::{Control, TraversalEvent};

/// Performs breadth-first search from `start`, returning vertices in
/// discovery order.
///
/// O(V + E).
///
/// # Errors
///
/// Returns an error if `start` is out of range.
///
/// # Example
///
/// ```
/// use algor_core::graph::Digraph;
/// use algor_core::traverse::bfs;
///
/// let mut g = Digraph::new(3);
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 2).unwrap();
/// assert_eq!(bfs(&g, 0).unwrap(), vec![0, 1, 2]);
/// ```
pub fn bfs(g: &Digraph, start: usize) -> Result<Vec<usize>> {
    let mut visited = Vec::new();
    bfs_with_visitor(g, start, |event| -> Control<()> {
        if let TraversalEvent::Discover(v) = event {
            visited.push(v);
        }
        Control::Continue
    })?;
    Ok(visited)
}

/// Performs breadth-first search with a visitor callback.
///
/// The visitor receives a [`TraversalEvent`] at each discovery, edge, and
/// finish; returning [`Control::Break`] stops the traversal immediately and
/// the value comes back as `Ok(Some(..))`. [`Control::Prune`] on a `Discover`
/// keeps that vertex's neighbors out of the queue; on a `TreeEdge` it drops
/// just that edge.
///
/// # Errors
///
/// Returns an error if `start` is out of range.
pub fn bfs_with_visitor<B, F>(g: &Digraph, start: usize, mut visitor: F) -> Result<Option<B>>
where
    F: FnMut(TraversalEvent) -> Control<B>,
{
    g.validate_vertex(start)?;

    let mut discovered: AlgorSet<usize> = AlgorSet::default();
    let mut queue: VecDeque<usize> = VecDeque::new();

    discovered.insert(start);
    queue.push_back(start);

    match visitor(TraversalEvent::Discover(start)) {
        Control::Break(b) => return Ok(Some(b)),
        Control::Prune => {
            return match visitor(TraversalEvent::Finish(start)) {
                Control::Break(b) => Ok(Some(b)),
                _ => Ok(None),
            };
        }
        Control::Continue => {}
    }

    while let Some(v) = queue.pop_front() {
        for w in g.adj(v)? {
            if discovered.insert(w) {
                // Tree edge: w seen for the first time
                match visitor(TraversalEvent::TreeEdge {
                    source: v,
                    target: w,
                }) {
                    Control::Break(b) => return Ok(Some(b)),
                    Control::Prune => continue,
                    Control::Continue => {}
                }

                match visitor(TraversalEvent::Discover(w)) {
                    Control::Break(b) => return Ok(Some(b)),
                    Control::Prune => continue, // discovered, but not explored
                    Control::Continue => {}
                }

                queue.push_back(w);
            } else if let Control::Break(b) = visitor(TraversalEvent::NonTreeEdge {
                source: v,
                target: w,
            }) {
                return Ok(Some(b));
            }
        }

        if let Control::Break(b) = visitor(TraversalEvent::Finish(v)) {
            return Ok(Some(b));
        }
    }

    Ok(None)
}

/// Groups vertices by their BFS distance from `start`.
///
/// `result[i]` holds every vertex at distance `i`; unreachable vertices do
/// not appear.
///
/// # Errors
///
/// Returns an error if `start` is out of range.
pub fn bfs_layers(g: &Digraph, start: usize) -> Result<Vec<Vec<usize>>> {
    g.validate_vertex(start)?;

    let mut layers: Vec<Vec<usize>> = Vec::new();
    let mut discovered: AlgorSet<usize> = AlgorSet::default();
    let mut current: Vec<usize> = vec![start];
    let mut next: Vec<usize> = Vec::new();
    discovered.insert(start);

    while !current.is_empty() {
        for &v in &current {
            for w in g.adj(v)? {
                if discovered.insert(w) {
                    next.push(w);
                }
            }
        }
        layers.push(std::mem::take(&mut current));
        std::mem::swap(&mut current, &mut next);
    }

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small diamond with a tail: 0 -> {1,2} -> 3 -> 4.
    fn diamond() -> Digraph {
        let mut g = Digraph::new(5);
        for (v, w) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            g.add_edge(v, w).unwrap();
        }
        g
    }

    #[test]
    fn test_bfs_discovers_in_distance_order() {
        let order = bfs(&diamond(), 0).unwrap();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        // 1 and 2 come before 3, which comes before 4
        assert!(order[1..3].contains(&1));
        assert!(order[1..3].contains(&2));
        assert_eq!(order[3], 3);
        assert_eq!(order[4], 4);
    }

    #[test]
    fn test_bfs_ignores_unreachable() {
        let mut g = Digraph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(2, 3).unwrap();
        assert_eq!(bfs(&g, 0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_bfs_rejects_bad_start() {
        let g = Digraph::new(2);
        assert!(bfs(&g, 2).is_err());
    }

    #[test]
    fn test_bfs_layers() {
        let layers = bfs_layers(&diamond(), 0).unwrap();
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[0], vec![0]);
        assert_eq!(layers[1].len(), 2);
        assert_eq!(layers[2], vec![3]);
        assert_eq!(layers[3], vec![4]);
    }

    #[test]
    fn test_visitor_break_stops_early() {
        let found = bfs_with_visitor(&diamond(), 0, |event| {
            if let TraversalEvent::Discover(v) = event {
                if v == 3 {
                    return Control::Break(v);
                }
            }
            Control::Continue
        })
        .unwrap();
        assert_eq!(found, Some(3));
    }

    #[test]
    fn test_visitor_prune_discover_skips_neighbors() {
        // Pruning every discovery after the start leaves only distance-1
        // vertices visited.
        let mut seen = Vec::new();
        bfs_with_visitor(&diamond(), 0, |event| -> Control<()> {
            if let TraversalEvent::Discover(v) = event {
                seen.push(v);
                if v != 0 {
                    return Control::Prune;
                }
            }
            Control::Continue
        })
        .unwrap();
        assert_eq!(seen.len(), 3); // 0, 1, 2 - never reaches 3
    }

    #[test]
    fn test_cycle_terminates() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        assert_eq!(bfs(&g, 0).unwrap(), vec![0, 1, 2]);
    }
}
