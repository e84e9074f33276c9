//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum FieldMapError {
    /// Raised when a scene or one of its parameters is invalid.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
    /// Wraps failures reading scene files or writing outputs.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Raised when a scene file is not valid JSON or misses required fields.
    #[error("scene parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FieldMapError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Convenience alias for results carrying [`FieldMapError`].
pub type Result<T> = std::result::Result<T, FieldMapError>;
