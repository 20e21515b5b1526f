//! Error types and exit codes for waygraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid vertex references)

use thiserror::Error;

use crate::graph::VertexId;

/// Process exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Usage = 2,
}

/// Errors that can occur during waygraph operations
#[derive(Error, Debug)]
pub enum WaygraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("graph needs at least one vertex (got {0})")]
    EmptyGraph(usize),

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WaygraphError {
    /// Map the error to its process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaygraphError::UnknownFormat(_)
            | WaygraphError::UsageError(_)
            | WaygraphError::EmptyGraph(_)
            | WaygraphError::VertexOutOfRange { .. } => ExitCode::Usage,

            WaygraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Stable machine-readable identifier for the JSON error envelope
    pub fn error_type(&self) -> &'static str {
        match self {
            WaygraphError::UnknownFormat(_) => "unknown_format",
            WaygraphError::UsageError(_) => "usage_error",
            WaygraphError::EmptyGraph(_) => "empty_graph",
            WaygraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            WaygraphError::Json(_) => "json_error",
        }
    }

    /// Render the error as a JSON envelope for `--format json` consumers
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Convenience result type for waygraph operations
pub type Result<T> = std::result::Result<T, WaygraphError>;
