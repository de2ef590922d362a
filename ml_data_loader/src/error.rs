//! Error types for loading operations.

use std::path::PathBuf;

use polars::prelude::PolarsError;

/// Result type for loading operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error type for loading operations
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format: '{0}' (supported: csv, json, parquet)")]
    UnsupportedFormat(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised by the polars readers; passed through untouched.
    #[error(transparent)]
    Decode(#[from] PolarsError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LoaderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoaderError::NotFound(_))
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, LoaderError::UnsupportedFormat(_))
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, LoaderError::NotImplemented(_))
    }
}
