//! Adjacency dump command

use waygraph_core::error::Result;
use waygraph_core::format::OutputFormat;
use waygraph_core::graph::Graph;

use crate::cli::Cli;

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&graph.dump())?),
        OutputFormat::Human => print!("{}", graph),
    }

    Ok(())
}
