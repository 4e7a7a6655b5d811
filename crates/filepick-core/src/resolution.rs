//! The outcome of a single resolution call.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How a resolved path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    /// Extracted from the identifier itself, no external lookup.
    Direct,
    /// Looked up in the content index.
    Queried,
    /// Copied byte-for-byte into the app-private directory.
    Copied,
    /// No strategy could produce a path.
    Unsupported,
}

/// Result of resolving one identifier. Constructed once, never mutated; an
/// unsupported result never carries a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    path: Option<PathBuf>,
    source: ResolutionSource,
}

impl Resolution {
    pub fn direct(path: impl Into<PathBuf>) -> Self {
        Resolution {
            path: Some(path.into()),
            source: ResolutionSource::Direct,
        }
    }

    pub fn queried(path: impl Into<PathBuf>) -> Self {
        Resolution {
            path: Some(path.into()),
            source: ResolutionSource::Queried,
        }
    }

    pub fn copied(path: impl Into<PathBuf>) -> Self {
        Resolution {
            path: Some(path.into()),
            source: ResolutionSource::Copied,
        }
    }

    pub fn unsupported() -> Self {
        Resolution {
            path: None,
            source: ResolutionSource::Unsupported,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn into_path(self) -> Option<PathBuf> {
        self.path
    }

    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    pub fn is_resolved(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_never_carries_a_path() {
        let r = Resolution::unsupported();
        assert_eq!(r.source(), ResolutionSource::Unsupported);
        assert!(r.path().is_none());
        assert!(!r.is_resolved());
    }

    #[test]
    fn into_path_surrenders_ownership() {
        assert_eq!(
            Resolution::queried("/sdcard/a.png").into_path(),
            Some(PathBuf::from("/sdcard/a.png"))
        );
        assert!(Resolution::unsupported().into_path().is_none());
    }

    #[test]
    fn serializes_source_lowercase() {
        let r = Resolution::direct("/tmp/a");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["source"], "direct");
        assert_eq!(json["path"], "/tmp/a");
    }
}
