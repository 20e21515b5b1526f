//! In-memory weighted graph over a fixed vertex set.
//!
//! Vertices are numbered `0..vertex_count` at construction and the index is
//! the vertex's permanent identity. Edges carry non-negative integer weights
//! and live in a per-vertex ordered adjacency map, so neighbor iteration is
//! deterministic (ascending neighbor id).
//!
//! Traversal algorithms take `&Graph` and keep their working state in a
//! per-call [`Traversal`](types::Traversal) value, so read-only queries over
//! a finished topology can run concurrently.

pub mod algos;
pub mod path;
pub mod types;

pub use algos::{bfs, dfs, dijkstra_all, dijkstra_to};
pub use path::{reachable, shortest_path};
pub use types::{GraphDump, PathResult, Traversal};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, WaygraphError};
use types::{EdgeDump, VertexDump};

/// Vertex identity: an index into the graph's vertex arena.
pub type VertexId = usize;

/// Non-negative edge weight.
pub type Weight = u64;

/// A vertex and its outgoing adjacency.
#[derive(Debug, Clone)]
struct Vertex {
    id: VertexId,
    /// Neighbor id to edge weight. Re-inserting a neighbor overwrites the
    /// weight (last write wins, no parallel edges).
    adjacency: BTreeMap<VertexId, Weight>,
}

/// In-memory weighted graph with a fixed vertex set.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with vertices `0..vertex_count` and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 {
            return Err(WaygraphError::EmptyGraph(vertex_count));
        }

        let vertices = (0..vertex_count)
            .map(|id| Vertex {
                id,
                adjacency: BTreeMap::new(),
            })
            .collect();

        Ok(Graph {
            vertices,
            edge_count: 0,
        })
    }

    /// Number of vertices, fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edge-insertion calls performed so far.
    ///
    /// An undirected insertion stores two arcs but counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `vertex` is a valid index for this graph.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertices.len()
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if !self.contains(vertex) {
            return Err(WaygraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertices.len(),
            });
        }
        Ok(())
    }

    /// Add a directed edge `src -> dst`.
    ///
    /// Re-adding an existing pair overwrites the stored weight. Self-loops
    /// are permitted.
    pub fn add_edge_directed(
        &mut self,
        src: VertexId,
        dst: VertexId,
        weight: Weight,
    ) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.edge_count += 1;
        self.vertices[src].adjacency.insert(dst, weight);
        Ok(())
    }

    /// Add an undirected edge by storing both arcs.
    ///
    /// Counts as a single insertion in [`edge_count`](Self::edge_count).
    pub fn add_edge_undirected(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        self.edge_count += 1;
        self.vertices[a].adjacency.insert(b, weight);
        self.vertices[b].adjacency.insert(a, weight);
        Ok(())
    }

    /// Outgoing neighbors of `vertex` with weights, ascending by neighbor id.
    ///
    /// Empty for an out-of-range vertex.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.vertices
            .get(vertex)
            .into_iter()
            .flat_map(|v| v.adjacency.iter().map(|(&to, &w)| (to, w)))
    }

    /// Stored weight of the arc `src -> dst`, if present.
    pub fn weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        self.vertices.get(src)?.adjacency.get(&dst).copied()
    }

    /// Serializable adjacency dump for machine consumers.
    pub fn dump(&self) -> GraphDump {
        GraphDump {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count,
            vertices: self
                .vertices
                .iter()
                .map(|v| VertexDump {
                    id: v.id,
                    edges: v
                        .adjacency
                        .iter()
                        .map(|(&to, &weight)| EdgeDump { to, weight })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Textual adjacency dump: one line per vertex, neighbors as `id(weight)`.
/// For human inspection only, not an equality contract.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{}\t:", vertex.id)?;
            for (&to, &weight) in &vertex.adjacency {
                write!(f, "\t{}({})", to, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
