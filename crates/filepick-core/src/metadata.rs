//! Descriptive metadata for a picked resource.

use serde::{Deserialize, Serialize};

/// Sentinel size for resources whose byte length could not be determined.
pub const UNKNOWN_SIZE: i64 = -1;

/// Display name, size, and MIME type of a resource. Derived independently of
/// path resolution; any field may be absent when the provider withholds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub display_name: Option<String>,
    pub size_bytes: i64,
    pub mime_type: Option<String>,
}

impl Default for FileMetadata {
    fn default() -> Self {
        FileMetadata {
            display_name: None,
            size_bytes: UNKNOWN_SIZE,
            mime_type: None,
        }
    }
}
