//! Error types for the CLI.

use costar_graph::GraphError;
use thiserror::Error;

/// CLI-specific result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum CliError {
    /// Graph construction error.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Prompt error.
    #[error("prompt error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
