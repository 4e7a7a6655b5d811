//! Identifier classification.
//!
//! Every resolution starts here: the scheme and authority of a resource
//! identifier alone decide which strategy may resolve it. Classification is
//! pure and total; unknown shapes land in `Category::Unsupported`, which is a
//! valid terminal outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::uri::ResourceUri;

/// Authority of the external-storage document provider.
pub const EXTERNAL_STORAGE_AUTHORITY: &str = "com.android.externalstorage.documents";
/// Authority of the downloads document provider.
pub const DOWNLOADS_AUTHORITY: &str = "com.android.providers.downloads.documents";
/// Authority of the media document provider.
pub const MEDIA_AUTHORITY: &str = "com.android.providers.media.documents";
/// Authority of the remote photo gallery; its identifiers never map to a
/// local path.
pub const REMOTE_GALLERY_AUTHORITY: &str = "com.google.android.apps.photos.content";

/// Resolution category. Closed set; each variant maps to exactly one
/// resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ExternalStorageDoc,
    DownloadsDoc,
    MediaDoc,
    RemoteReference,
    GenericContent,
    RawFile,
    Unsupported,
}

/// Whether the identifier is document-style: a `content` URI whose segments
/// are `document/<id>` or `tree/<t>/document/<id>`.
pub fn is_document_uri(uri: &ResourceUri) -> bool {
    uri.scheme() == "content" && document_id(uri).is_some()
}

/// The raw document id carried by a document-style URI, if any.
pub fn document_id(uri: &ResourceUri) -> Option<&str> {
    let segments = uri.segments();
    match segments.first().map(|s| s.as_str()) {
        Some("document") => segments.get(1).map(|s| s.as_str()),
        Some("tree") => match segments.get(2).map(|s| s.as_str()) {
            Some("document") => segments.get(3).map(|s| s.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Assign an identifier to its resolution category. First match wins; the
/// authority checks must run before the generic `content` scheme check, or
/// every document identifier would be swallowed by the generic strategy.
pub fn classify(uri: &ResourceUri) -> Category {
    if is_document_uri(uri) {
        return match uri.authority() {
            EXTERNAL_STORAGE_AUTHORITY => Category::ExternalStorageDoc,
            DOWNLOADS_AUTHORITY => Category::DownloadsDoc,
            MEDIA_AUTHORITY => Category::MediaDoc,
            // Document-style but no known authority: no strategy can
            // resolve it.
            _ => Category::Unsupported,
        };
    }

    match uri.scheme() {
        "content" if uri.authority() == REMOTE_GALLERY_AUTHORITY => Category::RemoteReference,
        "content" => Category::GenericContent,
        "file" => Category::RawFile,
        _ => Category::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> ResourceUri {
        ResourceUri::parse(s).unwrap()
    }

    #[test]
    fn document_authorities_classify_before_generic_content() {
        assert_eq!(
            classify(&uri(
                "content://com.android.externalstorage.documents/document/primary%3Aa.txt"
            )),
            Category::ExternalStorageDoc
        );
        assert_eq!(
            classify(&uri(
                "content://com.android.providers.downloads.documents/document/71"
            )),
            Category::DownloadsDoc
        );
        assert_eq!(
            classify(&uri(
                "content://com.android.providers.media.documents/document/image%3A42"
            )),
            Category::MediaDoc
        );
    }

    #[test]
    fn tree_document_shape_is_document_style() {
        assert!(is_document_uri(&uri(
            "content://com.android.providers.media.documents/tree/root/document/image%3A9"
        )));
        assert_eq!(
            document_id(&uri(
                "content://com.android.providers.media.documents/tree/root/document/image%3A9"
            )),
            Some("image:9")
        );
    }

    #[test]
    fn document_style_with_unknown_authority_is_unsupported() {
        assert_eq!(
            classify(&uri("content://com.example.cloud.documents/document/abc")),
            Category::Unsupported
        );
    }

    #[test]
    fn remote_gallery_precedes_generic_content() {
        assert_eq!(
            classify(&uri(
                "content://com.google.android.apps.photos.content/media/XyZ123"
            )),
            Category::RemoteReference
        );
    }

    #[test]
    fn plain_content_and_file_schemes() {
        assert_eq!(
            classify(&uri("content://media/external/images/media/5")),
            Category::GenericContent
        );
        assert_eq!(classify(&uri("file:///tmp/a.txt")), Category::RawFile);
    }

    #[test]
    fn unknown_scheme_is_unsupported() {
        assert_eq!(classify(&uri("https://example.com/a")), Category::Unsupported);
    }
}
