//! Provider-issued resource identifiers.
//!
//! A `ResourceUri` is the parsed form of the opaque string handed out by a
//! platform file picker (`content://authority/document/id`, `file:///tmp/a`).
//! It is immutable once parsed; the pipeline only ever inspects its scheme,
//! authority, and path segments.

use std::fmt;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::error::UriError;

/// Parsed resource identifier.
///
/// Percent-encoded octets in path segments are decoded at parse time, so a
/// picker-issued `document/primary%3ADownload%2Freport.pdf` yields the
/// segment `primary:Download/report.pdf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUri {
    scheme: String,
    authority: String,
    segments: Vec<String>,
}

impl ResourceUri {
    /// Parse an identifier of the form `scheme://authority/seg/ments`.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(UriError::Empty);
        }

        let (scheme, rest) = input
            .split_once("://")
            .ok_or_else(|| UriError::MissingScheme(input.to_string()))?;
        if scheme.is_empty() {
            return Err(UriError::MissingScheme(input.to_string()));
        }

        let (authority, path) = match rest.split_once('/') {
            Some((authority, path)) => (authority, path),
            None => (rest, ""),
        };

        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        Ok(ResourceUri {
            scheme: scheme.to_ascii_lowercase(),
            authority: authority.to_string(),
            segments,
        })
    }

    /// Build an identifier from already-split parts. Used by strategies that
    /// synthesize identifiers (e.g. a downloads-table row reference) and by
    /// tests.
    pub fn from_parts(
        scheme: impl Into<String>,
        authority: impl Into<String>,
        segments: &[&str],
    ) -> Self {
        ResourceUri {
            scheme: scheme.into().to_ascii_lowercase(),
            authority: authority.into(),
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The `/`-joined path component with a leading slash, or an empty string
    /// for identifiers without one.
    pub fn path(&self) -> String {
        if self.segments.is_empty() {
            String::new()
        } else {
            format!("/{}", self.segments.join("/"))
        }
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(|s| s.as_str())
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.authority, self.path())
    }
}
