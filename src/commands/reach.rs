//! Reachability command

use serde::Serialize;

use waygraph_core::error::Result;
use waygraph_core::format::OutputFormat;
use waygraph_core::graph::{reachable, Graph, VertexId};

use crate::cli::Cli;

#[derive(Debug, Serialize)]
struct ReachReport {
    from: VertexId,
    to: VertexId,
    reachable: bool,
    distance: Option<u64>,
}

/// Execute the reach command
pub fn execute(cli: &Cli, graph: &Graph, from: VertexId, to: VertexId) -> Result<()> {
    let distance = reachable(graph, from, to)?;

    match cli.format {
        OutputFormat::Json => {
            let report = ReachReport {
                from,
                to,
                reachable: distance.is_some(),
                distance,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Human => match distance {
            Some(d) => println!("reachable: distance {}", d),
            None => {
                if !cli.quiet {
                    println!("not reachable");
                }
            }
        },
    }

    Ok(())
}
