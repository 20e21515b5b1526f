//! Shortest-path command

use waygraph_core::error::Result;
use waygraph_core::format::OutputFormat;
use waygraph_core::graph::{shortest_path, Graph, VertexId};

use crate::cli::Cli;

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph, from: VertexId, to: VertexId) -> Result<()> {
    let result = shortest_path(graph, from, to)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
        OutputFormat::Human => {
            if result.found {
                println!("{}", result);
                if !cli.quiet {
                    if let Some(distance) = result.distance {
                        println!("total weight: {}", distance);
                    }
                }
            } else if !cli.quiet {
                println!("{}", result);
            }
        }
    }

    Ok(())
}
