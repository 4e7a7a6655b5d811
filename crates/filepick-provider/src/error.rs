//! Provider boundary errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Failed to open read stream for {uri}: {reason}")]
    OpenFailed { uri: String, reason: String },
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
