//! The resolver facade.

use std::fs;

use filepick_core::{
    classify, mime, Category, FileMetadata, Resolution, ResolverConfig, ResourceUri,
    SupportedTypeSet, UNKNOWN_SIZE,
};
use filepick_provider::{
    query_integer_column, query_string_column, ContentProvider, COLUMN_DISPLAY_NAME, COLUMN_SIZE,
};
use filepick_storage::LocalStore;

use crate::error::ResolveError;
use crate::strategies;

/// Resolves provider-issued identifiers into local paths and metadata.
///
/// Generic over the provider boundary so tests and tools can substitute an
/// in-memory index. All operations block on the calling thread.
pub struct Resolver<P> {
    provider: P,
    config: ResolverConfig,
    store: LocalStore,
    supported: SupportedTypeSet,
}

impl<P: ContentProvider> Resolver<P> {
    pub fn new(provider: P, config: ResolverConfig) -> Self {
        let store = LocalStore::new(&config.private_dir);
        Resolver {
            provider,
            config,
            store,
            supported: SupportedTypeSet::default_set().clone(),
        }
    }

    /// Replace the default supported-type allow-list.
    pub fn with_supported_types(mut self, supported: SupportedTypeSet) -> Self {
        self.supported = supported;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve an identifier without copying. Unresolvable shapes and query
    /// misses come back as `Resolution::unsupported()`; this never errors.
    pub fn resolve(&self, uri: &ResourceUri) -> Resolution {
        let resolution = match classify(uri) {
            Category::ExternalStorageDoc => {
                strategies::resolve_external_storage(uri, &self.config)
            }
            Category::DownloadsDoc => strategies::resolve_downloads(&self.provider, uri),
            Category::MediaDoc => strategies::resolve_media(&self.provider, uri),
            Category::GenericContent => strategies::resolve_generic(&self.provider, uri),
            Category::RemoteReference => strategies::resolve_remote(uri),
            Category::RawFile => strategies::resolve_raw_file(uri),
            Category::Unsupported => Resolution::unsupported(),
        };
        tracing::debug!(
            uri = %uri,
            source = ?resolution.source(),
            resolved = resolution.is_resolved(),
            "Resolved identifier"
        );
        resolution
    }

    /// Resolve an identifier, falling back to a byte-for-byte copy into the
    /// app-private directory when no strategy yields a path. Copy failure is
    /// the pipeline's only hard error.
    pub fn resolve_or_copy(&self, uri: &ResourceUri) -> Result<Resolution, ResolveError> {
        let resolution = self.resolve(uri);
        if resolution.is_resolved() {
            return Ok(resolution);
        }

        let display_name = self.display_name(uri);
        let mut reader = self.provider.open_read(uri)?;
        let path = self.store.write_stream(reader.as_mut(), display_name.as_deref())?;
        tracing::info!(
            uri = %uri,
            path = %path.display(),
            "Copied unresolvable identifier into local store"
        );
        Ok(Resolution::copied(path))
    }

    /// Provider-declared display name for `content` identifiers, else the
    /// identifier's last path segment.
    pub fn display_name(&self, uri: &ResourceUri) -> Option<String> {
        if uri.scheme() == "content" {
            if let Some(name) =
                query_string_column(&self.provider, uri, COLUMN_DISPLAY_NAME, None, &[])
            {
                return Some(name);
            }
        }
        uri.last_segment().map(String::from)
    }

    /// Byte size from the provider for `content` identifiers, else from the
    /// resolved path's filesystem metadata. `-1` when unknown.
    pub fn size_bytes(&self, uri: &ResourceUri) -> i64 {
        if uri.scheme() == "content" {
            if let Some(size) = query_integer_column(&self.provider, uri, COLUMN_SIZE, None, &[]) {
                return size;
            }
        }
        self.resolve(uri)
            .path()
            .and_then(|path| fs::metadata(path).ok())
            .map(|meta| meta.len() as i64)
            .unwrap_or(UNKNOWN_SIZE)
    }

    /// MIME type: provider-declared first, file-extension lookup second.
    pub fn mime_type(&self, uri: &ResourceUri) -> Option<String> {
        self.provider
            .declared_mime(uri)
            .or_else(|| mime::mime_from_extension(&uri.to_string()).map(String::from))
    }

    /// Whether the identifier's MIME type is on the allow-list. An
    /// undeterminable type is not supported.
    pub fn is_supported(&self, uri: &ResourceUri) -> bool {
        self.mime_type(uri)
            .is_some_and(|mime_type| self.supported.matches(&mime_type))
    }

    /// Assemble the full metadata record without resolving a path.
    pub fn metadata(&self, uri: &ResourceUri) -> FileMetadata {
        FileMetadata {
            display_name: self.display_name(uri),
            size_bytes: self.size_bytes(uri),
            mime_type: self.mime_type(uri),
        }
    }

    /// The allow-list this resolver checks `is_supported` against.
    pub fn supported_types(&self) -> &[String] {
        self.supported.patterns()
    }
}
