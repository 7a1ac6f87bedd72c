//! Error types shared by the gistline crates.

use thiserror::Error;

/// The closed set of failure kinds callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was rejected before any work was done.
    Validation,
    /// Scoring or composition could not produce output.
    InternalComputation,
}

/// Errors produced by the text engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GistError {
    /// Input too short, empty, or otherwise unusable.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Unexpected failure while scoring or composing output.
    #[error("internal computation error: {message}")]
    InternalComputation { message: String },
}

impl GistError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalComputation {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::InternalComputation { .. } => ErrorKind::InternalComputation,
        }
    }

    /// The human-readable reason without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message } | Self::InternalComputation { message } => message,
        }
    }
}

/// Result type for engine operations.
pub type GistResult<T> = Result<T, GistError>;
