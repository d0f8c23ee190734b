//! Error types for the artifact store

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Artifact is not valid JSON
    #[error("JSON error in {path}: {source}")]
    Json {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Artifact is valid JSON but has the wrong shape
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required input artifact does not exist
    #[error("Missing artifact: {0}")]
    MissingArtifact(PathBuf),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.into(),
            source,
        }
    }
}
