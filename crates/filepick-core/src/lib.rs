//! Filepick Core Library
//!
//! This crate provides the domain types shared across all filepick components:
//! the resource-URI model, identifier classification, MIME classification, and
//! resolver configuration. It performs no I/O; everything here is a pure
//! function of its inputs.

pub mod category;
pub mod config;
pub mod document;
pub mod error;
pub mod metadata;
pub mod mime;
pub mod resolution;
pub mod uri;

// Re-export commonly used types
pub use category::{classify, Category};
pub use config::ResolverConfig;
pub use document::{DocumentId, MediaKind};
pub use error::UriError;
pub use metadata::{FileMetadata, UNKNOWN_SIZE};
pub use mime::{mime_from_extension, SupportedTypeSet};
pub use resolution::{Resolution, ResolutionSource};
pub use uri::ResourceUri;
