//! Error types for the playground core.

use thiserror::Error;

/// Errors raised by the parsing and lookup helpers.
///
/// None of these reach the page: the UI substitutes defaults instead.
/// The CLI reports them on stderr.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundError {
    #[error("not a number: {input:?}")]
    InvalidNumber { input: String },

    #[error("unknown element role: {0}")]
    UnknownRole(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
