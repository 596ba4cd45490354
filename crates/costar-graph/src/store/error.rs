//! Error types for graph construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a graph store from a dataset.
///
/// Searches over a built store do not produce errors: an unreachable target
/// is a normal `None` result, not a failure.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The dataset directory does not exist.
    #[error("data directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// An IO error occurred while reading a dataset file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file could not be read as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;
