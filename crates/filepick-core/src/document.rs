//! Document identifiers embedded in document-style URIs.

use serde::{Deserialize, Serialize};

use crate::error::UriError;

/// The `<kind>:<localId>` pair carried in a document-style URI's `document`
/// segment. `kind` selects a sub-strategy (volume name or media kind);
/// `local_id` is an opaque row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId {
    pub kind: String,
    pub local_id: String,
}

impl DocumentId {
    pub fn parse(raw: &str) -> Result<Self, UriError> {
        let (kind, local_id) = raw
            .split_once(':')
            .ok_or_else(|| UriError::InvalidDocumentId(raw.to_string()))?;
        Ok(DocumentId {
            kind: kind.to_string(),
            local_id: local_id.to_string(),
        })
    }
}

/// Media kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    /// Map a document-id kind token to a media kind. Unrecognized tokens fall
    /// back to `Image`, which keeps unknown media documents resolvable
    /// against the image table rather than failing outright.
    pub fn from_token(token: &str) -> Self {
        match token {
            "image" => MediaKind::Image,
            "video" => MediaKind::Video,
            "audio" => MediaKind::Audio,
            "document" => MediaKind::Document,
            _ => MediaKind::Image,
        }
    }
}
