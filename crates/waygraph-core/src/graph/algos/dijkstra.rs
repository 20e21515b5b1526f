//! Dijkstra's single-source shortest-path algorithm.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::types::Traversal;
use crate::graph::{Graph, VertexId};

/// Heap entry ordered by accumulated distance, then vertex id so ties break
/// deterministically. Wrapped in `Reverse` to turn `BinaryHeap` into a
/// min-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    vertex: VertexId,
    distance: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-target Dijkstra from `source`: stops as soon as `dest` is
/// finalized. `traversal.distance(dest)` is the shortest weighted distance,
/// `None` when `dest` is unreachable.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra_to(graph: &Graph, source: VertexId, dest: VertexId) -> Result<Traversal> {
    graph.check_vertex(dest)?;
    run(graph, source, Some(dest))
}

/// All-targets Dijkstra from `source`: finalizes every reachable vertex.
/// `traversal.distances()` holds the full result in vertex-index order.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra_all(graph: &Graph, source: VertexId) -> Result<Traversal> {
    run(graph, source, None)
}

/// Shared core loop.
///
/// No decrease-key: every relaxation pushes a fresh heap entry, so stale
/// entries for vertices that were later finalized can surface on pop and
/// must be skipped by the `visited` check before processing.
fn run(graph: &Graph, source: VertexId, dest: Option<VertexId>) -> Result<Traversal> {
    graph.check_vertex(source)?;

    let mut state = Traversal::new(source, graph.vertex_count());
    let mut visited = vec![false; graph.vertex_count()];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    state.distances[source] = Some(0);
    heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: u,
        distance,
    })) = heap.pop()
    {
        if visited[u] {
            continue;
        }
        visited[u] = true;

        if dest == Some(u) {
            break;
        }

        for (v, weight) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }

            let candidate = distance.saturating_add(weight);
            let better = match state.distances[v] {
                Some(best) => candidate < best,
                None => true,
            };

            if better {
                state.distances[v] = Some(candidate);
                state.predecessors[v] = Some(u);
                heap.push(Reverse(HeapEntry {
                    vertex: v,
                    distance: candidate,
                }));
            }
        }
    }

    tracing::debug!(
        finalized = visited.iter().filter(|&&done| done).count(),
        "dijkstra complete"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaygraphError;

    /// The demonstration graph: 0-1-2-3 cycle with a 1-3 chord, 2-4-5 tail,
    /// self-loop on 5, all weights 1.
    fn demo() -> Graph {
        let mut g = Graph::new(6).unwrap();
        for &(a, b) in &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (2, 4), (4, 5), (5, 5)] {
            g.add_edge_undirected(a, b, 1).unwrap();
        }
        g
    }

    #[test]
    fn test_dijkstra_all_demo_distances() {
        let t = dijkstra_all(&demo(), 0).unwrap();
        let expected: Vec<Option<u64>> = [0, 1, 2, 2, 3, 4].iter().map(|&d| Some(d)).collect();
        assert_eq!(t.distances(), expected.as_slice());
    }

    #[test]
    fn test_dijkstra_prefers_lighter_detour() {
        // Direct 0-2 edge weighs 10, the 0-1-2 detour weighs 3
        let mut g = Graph::new(3).unwrap();
        g.add_edge_undirected(0, 2, 10).unwrap();
        g.add_edge_undirected(0, 1, 1).unwrap();
        g.add_edge_undirected(1, 2, 2).unwrap();

        let t = dijkstra_all(&g, 0).unwrap();
        assert_eq!(t.distance(2), Some(3));
        assert_eq!(t.predecessor(2), Some(1));
    }

    #[test]
    fn test_dijkstra_relaxation_tolerates_stale_entries() {
        // Vertex 3 is relaxed twice (via 1 then via 2), leaving a stale
        // heap entry that must be skipped once 3 is finalized.
        let mut g = Graph::new(4).unwrap();
        g.add_edge_directed(0, 1, 1).unwrap();
        g.add_edge_directed(0, 2, 2).unwrap();
        g.add_edge_directed(1, 3, 10).unwrap();
        g.add_edge_directed(2, 3, 3).unwrap();

        let t = dijkstra_all(&g, 0).unwrap();
        assert_eq!(t.distance(3), Some(5));
        assert_eq!(t.predecessor(3), Some(2));
    }

    #[test]
    fn test_dijkstra_to_matches_all_targets() {
        let g = demo();
        let all = dijkstra_all(&g, 0).unwrap();
        for dest in 0..g.vertex_count() {
            let single = dijkstra_to(&g, 0, dest).unwrap();
            assert_eq!(single.distance(dest), all.distance(dest));
        }
    }

    #[test]
    fn test_dijkstra_to_unreachable_is_none() {
        let mut g = Graph::new(3).unwrap();
        g.add_edge_undirected(0, 1, 1).unwrap();

        let t = dijkstra_to(&g, 0, 2).unwrap();
        assert_eq!(t.distance(2), None);
    }

    #[test]
    fn test_dijkstra_source_is_dest() {
        let t = dijkstra_to(&demo(), 4, 4).unwrap();
        assert_eq!(t.distance(4), Some(0));
        assert_eq!(t.predecessor(4), None);
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        let mut g = Graph::new(3).unwrap();
        g.add_edge_directed(0, 1, 0).unwrap();
        g.add_edge_directed(1, 2, 0).unwrap();

        let t = dijkstra_all(&g, 0).unwrap();
        assert_eq!(t.distance(2), Some(0));
    }

    #[test]
    fn test_dijkstra_self_loop_never_shortens() {
        let mut g = Graph::new(2).unwrap();
        g.add_edge_undirected(0, 1, 2).unwrap();
        g.add_edge_undirected(1, 1, 1).unwrap();

        let t = dijkstra_all(&g, 0).unwrap();
        assert_eq!(t.distance(1), Some(2));
    }

    #[test]
    fn test_dijkstra_distances_nondecreasing_along_tree() {
        let g = demo();
        let t = dijkstra_all(&g, 0).unwrap();
        for v in 0..g.vertex_count() {
            if let Some(pred) = t.predecessor(v) {
                assert!(t.distance(pred).unwrap() <= t.distance(v).unwrap());
            }
        }
    }

    #[test]
    fn test_dijkstra_bounds_checks() {
        let g = demo();
        assert!(matches!(
            dijkstra_all(&g, 6).unwrap_err(),
            WaygraphError::VertexOutOfRange { .. }
        ));
        assert!(matches!(
            dijkstra_to(&g, 0, 6).unwrap_err(),
            WaygraphError::VertexOutOfRange { .. }
        ));
        assert!(matches!(
            dijkstra_to(&g, 6, 0).unwrap_err(),
            WaygraphError::VertexOutOfRange { .. }
        ));
    }

    #[test]
    fn test_dijkstra_repeat_runs_identical() {
        let g = demo();
        assert_eq!(dijkstra_all(&g, 0).unwrap(), dijkstra_all(&g, 0).unwrap());
    }
}
