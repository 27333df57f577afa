//! Error types for stackdetectlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during stack detection
#[derive(Error, Debug)]
pub enum DetectError {
    /// Search root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Directory traversal failed
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to serialize the deployment matrix
    #[error("failed to serialize matrix: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to append to the reporting sink
    #[error("failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
