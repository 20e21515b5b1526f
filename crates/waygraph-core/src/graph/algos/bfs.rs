//! Breadth-first search.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::types::{Color, Traversal};
use crate::graph::{Graph, VertexId};

/// Breadth-first search from `source`.
///
/// Distances are hop counts: the minimum number of edges from `source` to
/// every reachable vertex. Unreached vertices stay at `None`. Edge weights
/// are ignored.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &Graph, source: VertexId) -> Result<Traversal> {
    graph.check_vertex(source)?;

    let mut state = Traversal::new(source, graph.vertex_count());
    let mut colors = vec![Color::Unvisited; graph.vertex_count()];
    let mut queue: VecDeque<(VertexId, u64)> = VecDeque::new();

    colors[source] = Color::Discovered;
    state.distances[source] = Some(0);
    queue.push_back((source, 0));

    while let Some((u, dist)) = queue.pop_front() {
        for (v, _weight) in graph.neighbors(u) {
            if colors[v] == Color::Unvisited {
                colors[v] = Color::Discovered;
                state.distances[v] = Some(dist + 1);
                state.predecessors[v] = Some(u);
                queue.push_back((v, dist + 1));
            }
        }
        colors[u] = Color::Finished;
    }

    tracing::debug!(
        reached = state.distances().iter().flatten().count(),
        "bfs complete"
    );
    Ok(state)
}
