//! Depth-first search.

use crate::error::Result;
use crate::graph::types::{Color, Traversal};
use crate::graph::{Graph, VertexId};

/// Depth-first search from `source`, iterative and stack-driven.
///
/// Structurally the BFS loop with a LIFO stack: a neighbor is marked,
/// assigned `distance = parent + 1` and a predecessor when first pushed, and
/// a vertex is finished once popped and expanded. Distances are therefore
/// tree-edge depths under the explicit stack's visiting order, not the
/// discovery/finish times of the recursive formulation.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs(graph: &Graph, source: VertexId) -> Result<Traversal> {
    graph.check_vertex(source)?;

    let mut state = Traversal::new(source, graph.vertex_count());
    let mut colors = vec![Color::Unvisited; graph.vertex_count()];
    let mut stack: Vec<(VertexId, u64)> = Vec::new();

    colors[source] = Color::Discovered;
    state.distances[source] = Some(0);
    stack.push((source, 0));

    while let Some((u, dist)) = stack.pop() {
        for (v, _weight) in graph.neighbors(u) {
            if colors[v] == Color::Unvisited {
                colors[v] = Color::Discovered;
                state.distances[v] = Some(dist + 1);
                state.predecessors[v] = Some(u);
                stack.push((v, dist + 1));
            }
        }
        colors[u] = Color::Finished;
    }

    tracing::debug!(
        reached = state.distances().iter().flatten().count(),
        "dfs complete"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaygraphError;
    use crate::graph::algos::bfs;

    fn chain(n: usize) -> Graph {
        let mut g = Graph::new(n).unwrap();
        for i in 0..n - 1 {
            g.add_edge_undirected(i, i + 1, 1).unwrap();
        }
        g
    }

    #[test]
    fn test_dfs_chain_depths() {
        // On a chain the DFS tree is the chain itself
        let g = chain(5);
        let t = dfs(&g, 0).unwrap();
        for v in 0..5 {
            assert_eq!(t.distance(v), Some(v as u64));
        }
    }

    #[test]
    fn test_dfs_reaches_same_set_as_bfs() {
        let mut g = Graph::new(7).unwrap();
        g.add_edge_undirected(0, 1, 1).unwrap();
        g.add_edge_undirected(1, 2, 1).unwrap();
        g.add_edge_undirected(2, 0, 1).unwrap();
        g.add_edge_undirected(2, 3, 1).unwrap();
        // 4, 5, 6 form a separate component
        g.add_edge_undirected(4, 5, 1).unwrap();
        g.add_edge_undirected(5, 6, 1).unwrap();

        let d = dfs(&g, 0).unwrap();
        let b = bfs(&g, 0).unwrap();
        for v in 0..7 {
            assert_eq!(d.distance(v).is_some(), b.distance(v).is_some());
        }
    }

    #[test]
    fn test_dfs_predecessor_depths_consistent() {
        // Diamond: 0-1, 0-2, 1-3, 2-3. Whatever order the stack imposes,
        // every tree edge must step depth by exactly one.
        let mut g = Graph::new(4).unwrap();
        g.add_edge_undirected(0, 1, 1).unwrap();
        g.add_edge_undirected(0, 2, 1).unwrap();
        g.add_edge_undirected(1, 3, 1).unwrap();
        g.add_edge_undirected(2, 3, 1).unwrap();

        let t = dfs(&g, 0).unwrap();
        for v in 1..4 {
            let pred = t.predecessor(v).unwrap();
            assert_eq!(t.distance(pred).unwrap() + 1, t.distance(v).unwrap());
        }
    }

    #[test]
    fn test_dfs_source_state() {
        let g = chain(3);
        let t = dfs(&g, 2).unwrap();
        assert_eq!(t.source(), 2);
        assert_eq!(t.distance(2), Some(0));
        assert_eq!(t.predecessor(2), None);
    }

    #[test]
    fn test_dfs_unreachable_stays_none() {
        let mut g = Graph::new(3).unwrap();
        g.add_edge_directed(1, 2, 1).unwrap();

        let t = dfs(&g, 0).unwrap();
        assert_eq!(t.distance(1), None);
        assert_eq!(t.distance(2), None);
    }

    #[test]
    fn test_dfs_out_of_range_source() {
        let g = chain(2);
        let err = dfs(&g, 2).unwrap_err();
        assert!(matches!(err, WaygraphError::VertexOutOfRange { .. }));
    }

    #[test]
    fn test_dfs_repeat_runs_identical() {
        let g = chain(4);
        assert_eq!(dfs(&g, 0).unwrap(), dfs(&g, 0).unwrap());
    }
}
