//! Graph construction from CLI flags.
//!
//! Without `--vertices`, commands run against the built-in demonstration
//! graph so the tool is usable out of the box.

use waygraph_core::error::{Result, WaygraphError};
use waygraph_core::graph::Graph;

use crate::cli::Cli;

/// Build the graph the command will run against.
pub fn build_graph(cli: &Cli) -> Result<Graph> {
    match cli.vertices {
        Some(count) => {
            let mut graph = Graph::new(count)?;
            for spec in &cli.edge {
                graph.add_edge_undirected(spec.from, spec.to, spec.weight)?;
            }
            for spec in &cli.arc {
                graph.add_edge_directed(spec.from, spec.to, spec.weight)?;
            }
            Ok(graph)
        }
        None if cli.edge.is_empty() && cli.arc.is_empty() => demonstration_graph(),
        None => Err(WaygraphError::UsageError(
            "--edge/--arc require --vertices".to_string(),
        )),
    }
}

/// Six-vertex demonstration graph: a 0-1-2-3 cycle with a 1-3 chord, a
/// 2-4-5 tail, and a self-loop on 5. All weights are 1.
pub fn demonstration_graph() -> Result<Graph> {
    let mut graph = Graph::new(6)?;
    for &(a, b) in &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (2, 4), (4, 5), (5, 5)] {
        graph.add_edge_undirected(a, b, 1)?;
    }
    Ok(graph)
}
