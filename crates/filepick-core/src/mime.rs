//! MIME classification.
//!
//! Two static tables back this module: an extension→MIME lookup used when the
//! provider declares no type, and the default allow-list of supported type
//! patterns. Both are built once at first use and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

static EXTENSION_TO_MIME: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("mp4", "video/mp4"),
        ("mkv", "video/x-matroska"),
        ("webm", "video/webm"),
        ("mp3", "audio/mpeg"),
        ("wav", "audio/x-wav"),
        ("ogg", "audio/ogg"),
        ("txt", "text/plain"),
        ("md", "text/markdown"),
        ("html", "text/html"),
        ("csv", "text/csv"),
        ("pdf", "application/pdf"),
        ("doc", "application/msword"),
        (
            "docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
        ("xls", "application/vnd.ms-excel"),
        (
            "xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        ("ppt", "application/vnd.ms-powerpoint"),
        (
            "pptx",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ),
        ("zip", "application/zip"),
        ("rar", "application/x-rar-compressed"),
        ("json", "application/json"),
        ("xml", "application/xml"),
    ])
});

static DEFAULT_SUPPORTED: LazyLock<SupportedTypeSet> = LazyLock::new(|| {
    SupportedTypeSet::new(vec![
        "image/*".to_string(),
        "video/*".to_string(),
        "audio/*".to_string(),
        "text/*".to_string(),
        "application/pdf".to_string(),
        "application/msword".to_string(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
        "application/vnd.ms-excel".to_string(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
        "application/vnd.ms-powerpoint".to_string(),
        "application/vnd.openxmlformats-officedocument.presentationml.presentation".to_string(),
        "application/zip".to_string(),
        "application/x-rar-compressed".to_string(),
        "application/json".to_string(),
        "application/xml".to_string(),
        "text/csv".to_string(),
    ])
});

/// Ordered set of supported MIME patterns: exact types
/// (`"application/pdf"`) or wildcard prefixes (`"image/*"`).
#[derive(Debug, Clone)]
pub struct SupportedTypeSet {
    patterns: Vec<String>,
}

impl SupportedTypeSet {
    pub fn new(patterns: Vec<String>) -> Self {
        SupportedTypeSet { patterns }
    }

    /// The process-wide default allow-list.
    pub fn default_set() -> &'static SupportedTypeSet {
        &DEFAULT_SUPPORTED
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a MIME type matches the set: exact equality, or for `x/*`
    /// patterns a prefix match up to the slash. Parameters on the candidate
    /// type (`; charset=...`) are ignored.
    pub fn matches(&self, mime_type: &str) -> bool {
        let normalized = normalize_mime_type(mime_type);
        self.patterns.iter().any(|pattern| {
            if let Some(prefix) = pattern.strip_suffix("/*") {
                normalized
                    .split_once('/')
                    .is_some_and(|(main, _)| main == prefix)
            } else {
                normalized == pattern
            }
        })
    }
}

/// Strip MIME parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(mime_type: &str) -> &str {
    mime_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(mime_type)
}

/// Derive a MIME type from the file extension of an identifier's string
/// form. Returns `None` for unknown or missing extensions.
pub fn mime_from_extension(uri_str: &str) -> Option<&'static str> {
    let extension = extension_of(uri_str)?;
    EXTENSION_TO_MIME.get(extension.to_ascii_lowercase().as_str()).copied()
}

fn extension_of(s: &str) -> Option<&str> {
    let name = s.rsplit('/').next().unwrap_or(s);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_pattern_matches_subtype() {
        let set = SupportedTypeSet::default_set();
        assert!(set.matches("image/png"));
        assert!(set.matches("video/x-matroska"));
        assert!(set.matches("text/plain; charset=utf-8"));
    }

    #[test]
    fn exact_pattern_requires_full_match() {
        let set = SupportedTypeSet::default_set();
        assert!(set.matches("application/pdf"));
        assert!(set.matches("application/zip"));
        assert!(!set.matches("application/x-foo"));
        assert!(!set.matches("application/pdf2"));
    }

    #[test]
    fn wildcard_does_not_match_bare_prefix() {
        let set = SupportedTypeSet::new(vec!["image/*".to_string()]);
        assert!(!set.matches("image"));
        assert!(!set.matches("imagery/png"));
    }

    #[test]
    fn extension_lookup() {
        assert_eq!(
            mime_from_extension("content://media/external/a/cat.JPG"),
            Some("image/jpeg")
        );
        assert_eq!(mime_from_extension("file:///tmp/notes.txt"), Some("text/plain"));
        assert_eq!(mime_from_extension("file:///tmp/archive.weird"), None);
        assert_eq!(mime_from_extension("content://downloads/17"), None);
        assert_eq!(mime_from_extension("file:///tmp/.hidden"), None);
    }

    #[test]
    fn default_set_is_ordered_and_stable() {
        let patterns = SupportedTypeSet::default_set().patterns();
        assert_eq!(patterns.len(), 16);
        assert_eq!(patterns[0], "image/*");
        assert_eq!(patterns[15], "text/csv");
    }
}
