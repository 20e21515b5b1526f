//! Waygraph - weighted graph traversal CLI
//!
//! Runs shortest-path, distance, and reachability queries over a graph
//! described on the command line, or over a built-in demonstration graph.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use waygraph_core::error::ExitCode as WaygraphExitCode;
use waygraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WaygraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
