//! Resolver errors.
//!
//! Unsupported identifier shapes and query misses are values
//! (`Resolution::unsupported()`), not errors; the only hard failures the
//! pipeline can produce are stream-copy failures.

use filepick_provider::ProviderError;
use filepick_storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Source stream error: {0}")]
    Source(#[from] ProviderError),

    #[error("Copy to local storage failed: {0}")]
    Copy(#[from] StoreError),
}
