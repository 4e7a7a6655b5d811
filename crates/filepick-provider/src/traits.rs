//! Provider traits.

use std::io::Read;

use filepick_core::ResourceUri;

use crate::error::ProviderResult;
use crate::row::Row;

/// Read-only tabular query interface over the content index.
///
/// `columns` is the projection, `selection` an optional filter expression
/// with `?` placeholders bound from `args`. Implementations return all
/// matching rows; the pipeline only ever consumes the first.
pub trait ContentIndex {
    fn query(
        &self,
        uri: &ResourceUri,
        columns: &[&str],
        selection: Option<&str>,
        args: &[&str],
    ) -> ProviderResult<Vec<Row>>;
}

/// Byte-stream source for identifiers that expose no filesystem path.
pub trait ContentSource {
    /// Open a blocking read stream over the resource's content.
    fn open_read(&self, uri: &ResourceUri) -> ProviderResult<Box<dyn Read + Send>>;

    /// The provider-declared MIME type, if any.
    fn declared_mime(&self, uri: &ResourceUri) -> Option<String>;
}

/// Full provider boundary the resolver works against.
pub trait ContentProvider: ContentIndex + ContentSource {}

impl<T: ContentIndex + ContentSource> ContentProvider for T {}

/// Query a single text column and return the first row's value.
///
/// Provider failure (index unreachable, identifier the provider does not
/// serve) and empty results both surface as `None`: an unresolvable lookup
/// is a normal strategy outcome, never a crash. The failure cause is logged
/// at debug level.
pub fn query_string_column<P: ContentIndex + ?Sized>(
    provider: &P,
    uri: &ResourceUri,
    column: &str,
    selection: Option<&str>,
    args: &[&str],
) -> Option<String> {
    match provider.query(uri, &[column], selection, args) {
        Ok(rows) => rows.first().and_then(|row| row.text(column)).map(String::from),
        Err(err) => {
            tracing::debug!(
                uri = %uri,
                column = %column,
                error = %err,
                "Content index query failed"
            );
            None
        }
    }
}

/// Query a single integer column and return the first row's value. Same
/// absent-not-crash contract as [`query_string_column`].
pub fn query_integer_column<P: ContentIndex + ?Sized>(
    provider: &P,
    uri: &ResourceUri,
    column: &str,
    selection: Option<&str>,
    args: &[&str],
) -> Option<i64> {
    match provider.query(uri, &[column], selection, args) {
        Ok(rows) => rows.first().and_then(|row| row.integer(column)),
        Err(err) => {
            tracing::debug!(
                uri = %uri,
                column = %column,
                error = %err,
                "Content index query failed"
            );
            None
        }
    }
}
