//! Error types for nestkit.

use thiserror::Error;

/// All possible errors from nestkit operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value had the wrong shape for the operation (usually a non-object
    /// where an object was required).
    #[error("invalid input to {operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn invalid_input(operation: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            operation,
            reason: reason.into(),
        }
    }

    /// Prefix an input error with the position of the offending item.
    pub(crate) fn at_position(self, item: &str, index: usize) -> Self {
        match self {
            Error::InvalidInput { operation, reason } => Error::InvalidInput {
                operation,
                reason: format!("{item} {index}: {reason}"),
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for nestkit operations.
pub type Result<T> = std::result::Result<T, Error>;
