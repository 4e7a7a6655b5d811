//! Storage operation errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirFailed { path: PathBuf, reason: String },

    #[error("Failed to create destination file {path}: {reason}")]
    CreateFileFailed { path: PathBuf, reason: String },

    #[error("Copy failed after {bytes_written} bytes into {path}: {reason}")]
    CopyFailed {
        path: PathBuf,
        bytes_written: u64,
        reason: String,
    },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
