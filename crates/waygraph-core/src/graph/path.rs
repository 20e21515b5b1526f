//! Reachability and shortest-path reconstruction.

use crate::error::Result;
use crate::graph::algos::dijkstra_to;
use crate::graph::types::PathResult;
use crate::graph::{Graph, VertexId};

/// Weighted distance from `src` to `dest`, or `None` when unreachable.
///
/// Runs a full single-target Dijkstra on every call; this is a fresh
/// traversal, not a cached lookup.
pub fn reachable(graph: &Graph, src: VertexId, dest: VertexId) -> Result<Option<u64>> {
    let traversal = dijkstra_to(graph, src, dest)?;
    Ok(traversal.distance(dest))
}

/// Shortest weighted path from `src` to `dest`.
///
/// The vertex sequence runs source-to-destination; `shortest_path(g, s, s)`
/// yields the single-element sequence `[s]`.
pub fn shortest_path(graph: &Graph, src: VertexId, dest: VertexId) -> Result<PathResult> {
    let traversal = dijkstra_to(graph, src, dest)?;
    let distance = traversal.distance(dest);
    let vertices = traversal.path_to(dest).unwrap_or_default();

    Ok(PathResult {
        from: src,
        to: dest,
        found: distance.is_some(),
        distance,
        vertices,
    })
}
