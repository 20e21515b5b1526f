//! CLI argument parsing for waygraph
//!
//! Uses clap for argument parsing. Global flags cover output format,
//! logging, and the graph description (`--vertices`, `--edge`, `--arc`).

use clap::{Parser, Subcommand};

pub use waygraph_core::format::OutputFormat;
use waygraph_core::graph::{VertexId, Weight};

/// Waygraph - weighted graph traversal CLI
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Number of vertices for a caller-described graph
    #[arg(long, global = true)]
    pub vertices: Option<usize>,

    /// Undirected edge U:V:W (repeatable, requires --vertices)
    #[arg(long, global = true, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edge: Vec<EdgeSpec>,

    /// Directed edge U:V:W (repeatable, requires --vertices)
    #[arg(long, global = true, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub arc: Vec<EdgeSpec>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest weighted path between two vertices
    Path {
        /// Source vertex
        from: VertexId,

        /// Destination vertex
        to: VertexId,
    },

    /// Shortest distances from a vertex to every vertex
    Distances {
        /// Source vertex
        from: VertexId,
    },

    /// Weighted distance to a destination, if reachable
    Reach {
        /// Source vertex
        from: VertexId,

        /// Destination vertex
        to: VertexId,
    },

    /// Print the adjacency structure
    Show,
}

/// A single U:V:W edge description from the command line
#[derive(Debug, Clone, Copy)]
pub struct EdgeSpec {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

fn parse_edge_spec(s: &str) -> Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [from, to, weight] = parts.as_slice() else {
        return Err(format!("expected U:V:W, got '{}'", s));
    };

    let from = from
        .trim()
        .parse()
        .map_err(|_| format!("invalid vertex '{}'", from))?;
    let to = to
        .trim()
        .parse()
        .map_err(|_| format!("invalid vertex '{}'", to))?;
    let weight = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}'", weight))?;

    Ok(EdgeSpec { from, to, weight })
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_spec() {
        let spec = parse_edge_spec("0:5:12").unwrap();
        assert_eq!(spec.from, 0);
        assert_eq!(spec.to, 5);
        assert_eq!(spec.weight, 12);
    }

    #[test]
    fn test_parse_edge_spec_rejects_garbage() {
        assert!(parse_edge_spec("0:5").is_err());
        assert!(parse_edge_spec("0:5:1:9").is_err());
        assert!(parse_edge_spec("a:b:c").is_err());
        assert!(parse_edge_spec("0:1:-4").is_err());
    }

    #[test]
    fn test_cli_parses_graph_flags() {
        let cli = Cli::try_parse_from([
            "waygraph",
            "--vertices",
            "3",
            "--edge",
            "0:1:1",
            "--arc",
            "1:2:4",
            "path",
            "0",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.vertices, Some(3));
        assert_eq!(cli.edge.len(), 1);
        assert_eq!(cli.arc.len(), 1);
        assert!(matches!(cli.command, Commands::Path { from: 0, to: 2 }));
    }
}
