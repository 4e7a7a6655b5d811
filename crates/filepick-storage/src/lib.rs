//! App-private local storage.
//!
//! Home of the stream copier (`LocalStore`) and the housekeeping helpers
//! callers use to clean up copied files. Everything here is synchronous and
//! blocking; the resolver calls it on whatever thread the caller provides.

pub mod error;
pub mod housekeeping;
pub mod local;

pub use error::{StoreError, StoreResult};
pub use housekeeping::{delete_file, ensure_dir};
pub use local::LocalStore;
