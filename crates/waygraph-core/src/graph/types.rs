//! Shared types for graph traversal results.

use std::fmt;

use serde::Serialize;

use crate::graph::{VertexId, Weight};

/// Per-vertex state machine for BFS/DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Color {
    /// Not yet seen by the traversal
    #[default]
    Unvisited,
    /// Seen and queued for expansion
    Discovered,
    /// Fully expanded
    Finished,
}

/// Working state of a single traversal, arena-indexed by vertex id.
///
/// Every algorithm call allocates its own `Traversal` and returns it, so
/// results from one call can never leak into the next and the graph itself
/// stays read-only during queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    source: VertexId,
    pub(crate) distances: Vec<Option<u64>>,
    pub(crate) predecessors: Vec<Option<VertexId>>,
}

impl Traversal {
    pub(crate) fn new(source: VertexId, vertex_count: usize) -> Self {
        Traversal {
            source,
            distances: vec![None; vertex_count],
            predecessors: vec![None; vertex_count],
        }
    }

    /// Source vertex this traversal started from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source, or `None` if the vertex was never reached.
    ///
    /// Hop count for BFS/DFS, cumulative edge weight for Dijkstra.
    pub fn distance(&self, vertex: VertexId) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Vertex from which `vertex` was first reached. `None` for the source
    /// itself and for unreached vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// All distances in vertex-index order.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// Reconstruct the traversal-tree path from the source to `dest`.
    ///
    /// Walks predecessor links back from `dest` and returns the vertex ids
    /// in source-to-destination order. `Some(vec![source])` when `dest` is
    /// the source, `None` when `dest` was never reached.
    pub fn path_to(&self, dest: VertexId) -> Option<Vec<VertexId>> {
        self.distance(dest)?;

        let mut path = vec![dest];
        let mut current = dest;
        while let Some(pred) = self.predecessor(current) {
            path.push(pred);
            current = pred;
        }
        path.reverse();
        Some(path)
    }
}

/// Result of a shortest-path query between two vertices.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: VertexId,
    pub to: VertexId,
    pub found: bool,
    /// Total path weight, absent when no path exists.
    pub distance: Option<u64>,
    /// Vertex ids in source-to-destination order, empty when no path exists.
    pub vertices: Vec<VertexId>,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.found {
            return write!(f, "no path from {} to {}", self.from, self.to);
        }

        let mut first = true;
        for vertex in &self.vertices {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
            first = false;
        }
        Ok(())
    }
}

/// Serializable adjacency dump of a whole graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphDump {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexDump>,
}

/// One vertex in a [`GraphDump`].
#[derive(Debug, Clone, Serialize)]
pub struct VertexDump {
    pub id: VertexId,
    pub edges: Vec<EdgeDump>,
}

/// One outgoing edge in a [`VertexDump`].
#[derive(Debug, Clone, Serialize)]
pub struct EdgeDump {
    pub to: VertexId,
    pub weight: Weight,
}
