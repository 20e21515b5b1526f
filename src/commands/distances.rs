//! All-targets distances command

use serde::Serialize;

use waygraph_core::error::Result;
use waygraph_core::format::OutputFormat;
use waygraph_core::graph::{dijkstra_all, Graph, VertexId};

use crate::cli::Cli;

#[derive(Debug, Serialize)]
struct DistanceReport {
    from: VertexId,
    /// Shortest weighted distance per vertex, `null` when unreachable
    distances: Vec<Option<u64>>,
}

/// Execute the distances command
pub fn execute(cli: &Cli, graph: &Graph, from: VertexId) -> Result<()> {
    let traversal = dijkstra_all(graph, from)?;

    match cli.format {
        OutputFormat::Json => {
            let report = DistanceReport {
                from,
                distances: traversal.distances().to_vec(),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Human => {
            for (vertex, distance) in traversal.distances().iter().enumerate() {
                match distance {
                    Some(d) => println!("{}\t{}", vertex, d),
                    None => println!("{}\t-", vertex),
                }
            }
        }
    }

    Ok(())
}
