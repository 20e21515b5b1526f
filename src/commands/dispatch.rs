//! Command dispatch logic for waygraph

use std::time::Instant;

use waygraph_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{distances, path, reach, sample, show};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = sample::build_graph(cli)?;

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "graph ready"
    );

    match &cli.command {
        Commands::Path { from, to } => path::execute(cli, &graph, *from, *to),
        Commands::Distances { from } => distances::execute(cli, &graph, *from),
        Commands::Reach { from, to } => reach::execute(cli, &graph, *from, *to),
        Commands::Show => show::execute(cli, &graph),
    }
}
