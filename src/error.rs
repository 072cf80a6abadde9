//! Error types for chitty
//!
//! Everything that can go wrong at a boundary (storage, import files, the
//! credential gate) is reported through [`ChittyError`]. Store operations
//! themselves never fail: lookups that miss are silent no-ops.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the persistence, transfer and auth boundaries
#[derive(Debug, Error)]
pub enum ChittyError {
    /// Content is structurally unacceptable (e.g. no `chitties` array)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Content could not be parsed as a snapshot
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("io error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The credential gate rejected the login
    #[error("invalid email or password")]
    Auth,
}

impl ChittyError {
    /// Build an I/O error tagged with the path that failed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from validating content
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias for chitty boundaries
pub type Result<T> = std::result::Result<T, ChittyError>;
