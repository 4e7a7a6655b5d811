//! Content-provider boundary.
//!
//! This crate defines the two traits the resolution pipeline depends on (a
//! read-only tabular query interface and a byte-stream source) together with
//! the row model they exchange and an in-memory provider used by tests and
//! the CLI. The pipeline never couples to a concrete backing store.

pub mod error;
pub mod memory;
pub mod row;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use memory::MemoryProvider;
pub use row::{IndexValue, Row, COLUMN_DISPLAY_NAME, COLUMN_PATH, COLUMN_SIZE};
pub use traits::{
    query_integer_column, query_string_column, ContentIndex, ContentProvider, ContentSource,
};
