//! One resolution strategy per identifier category.
//!
//! Every strategy either produces a path or returns
//! `Resolution::unsupported()`; none of them errors. Query misses, malformed
//! document ids, and unknown volumes are all valid "could not resolve"
//! outcomes the caller may still recover from via the copy fallback.

use filepick_core::{category, DocumentId, MediaKind, Resolution, ResolverConfig, ResourceUri};
use filepick_provider::{query_string_column, ContentIndex, COLUMN_PATH};

/// `primary:<relative>` document ids resolve against the public downloads
/// root. Other volume names are a known gap: unsupported, not mis-resolved.
pub(crate) fn resolve_external_storage(uri: &ResourceUri, config: &ResolverConfig) -> Resolution {
    let Some(doc) = document_id(uri) else {
        return Resolution::unsupported();
    };
    if doc.kind.eq_ignore_ascii_case("primary") {
        Resolution::direct(config.public_downloads_root.join(&doc.local_id))
    } else {
        tracing::debug!(volume = %doc.kind, "Unhandled non-primary storage volume");
        Resolution::unsupported()
    }
}

/// Downloads documents carry a bare numeric row id; resolve it through the
/// public downloads table.
pub(crate) fn resolve_downloads<P: ContentIndex>(provider: &P, uri: &ResourceUri) -> Resolution {
    let Some(raw) = category::document_id(uri) else {
        return Resolution::unsupported();
    };
    let Ok(row_id) = raw.parse::<i64>() else {
        tracing::debug!(document_id = %raw, "Downloads document id is not numeric");
        return Resolution::unsupported();
    };
    let row_uri = ResourceUri::from_parts(
        "content",
        "downloads",
        &["public_downloads", &row_id.to_string()],
    );
    match query_string_column(provider, &row_uri, COLUMN_PATH, None, &[]) {
        Some(path) => Resolution::queried(path),
        None => Resolution::unsupported(),
    }
}

/// Media documents name their kind in the document id; map the kind to its
/// media table and look the row up by `_id`.
pub(crate) fn resolve_media<P: ContentIndex>(provider: &P, uri: &ResourceUri) -> Resolution {
    let Some(doc) = document_id(uri) else {
        return Resolution::unsupported();
    };
    let table_uri = media_table_uri(MediaKind::from_token(&doc.kind));
    match query_string_column(
        provider,
        &table_uri,
        COLUMN_PATH,
        Some("_id = ?"),
        &[&doc.local_id],
    ) {
        Some(path) => Resolution::queried(path),
        None => Resolution::unsupported(),
    }
}

/// Generic content identifiers go straight to the index, unfiltered.
pub(crate) fn resolve_generic<P: ContentIndex>(provider: &P, uri: &ResourceUri) -> Resolution {
    match query_string_column(provider, uri, COLUMN_PATH, None, &[]) {
        Some(path) => Resolution::queried(path),
        None => Resolution::unsupported(),
    }
}

/// Remote-gallery references resolve to their last path segment verbatim; it
/// is a display value, never a local filesystem path.
pub(crate) fn resolve_remote(uri: &ResourceUri) -> Resolution {
    match uri.last_segment() {
        Some(segment) => Resolution::direct(segment),
        None => Resolution::unsupported(),
    }
}

/// `file` identifiers are already paths.
pub(crate) fn resolve_raw_file(uri: &ResourceUri) -> Resolution {
    let path = uri.path();
    if path.is_empty() {
        Resolution::unsupported()
    } else {
        Resolution::direct(path)
    }
}

fn document_id(uri: &ResourceUri) -> Option<DocumentId> {
    let raw = category::document_id(uri)?;
    match DocumentId::parse(raw) {
        Ok(doc) => Some(doc),
        Err(err) => {
            tracing::debug!(uri = %uri, error = %err, "Malformed document id");
            None
        }
    }
}

/// Table identifier for a media kind. `Document` has no table of its own and
/// falls back to the image table, as does any unrecognized kind token.
fn media_table_uri(kind: MediaKind) -> ResourceUri {
    let table = match kind {
        MediaKind::Image | MediaKind::Document => "images",
        MediaKind::Video => "video",
        MediaKind::Audio => "audio",
    };
    ResourceUri::from_parts("content", "media", &["external", table, "media"])
}
