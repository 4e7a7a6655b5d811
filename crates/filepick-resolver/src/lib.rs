//! Resolution pipeline.
//!
//! Ties the pieces together: classify an identifier, dispatch to its
//! resolution strategy, fall back to the stream copier when nothing yields a
//! path, and assemble file metadata. The whole pipeline is synchronous and
//! blocking; callers own any threading.

pub mod error;
pub mod resolver;
mod strategies;

pub use error::ResolveError;
pub use resolver::Resolver;
