//! Error types for the core domain model.

#[derive(Debug, thiserror::Error)]
pub enum UriError {
    #[error("Missing scheme in identifier: {0}")]
    MissingScheme(String),

    #[error("Empty identifier")]
    Empty,

    #[error("Invalid document id (expected <kind>:<localId>): {0}")]
    InvalidDocumentId(String),
}
