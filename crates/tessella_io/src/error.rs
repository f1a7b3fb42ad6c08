//! Error types for tessella_io crate.
//!
//! Provides structured error handling for run-history persistence.

use thiserror::Error;

/// Main error type for tessella_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Compression errors
    #[error("Compression error: {0}")]
    Compression(String),

    /// Not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for tessella_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new compression error.
    #[must_use]
    pub fn compression<S: Into<String>>(msg: S) -> Self {
        Self::Compression(msg.into())
    }

    /// Creates a new not found error.
    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
