//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An identifier could not be parsed from its source representation.
    ///
    /// Dataset rows carry ids as decimal strings; anything that does not
    /// parse as an unsigned integer ends up here.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}
