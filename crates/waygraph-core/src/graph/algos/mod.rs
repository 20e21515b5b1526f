//! Traversal algorithms over a fixed-vertex graph.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra_all, dijkstra_to};
