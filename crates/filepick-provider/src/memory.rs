//! In-memory provider for tests and the CLI.
//!
//! Canned rows, byte blobs, and declared MIME types are registered per
//! identifier; queries honor single-column `<col> = ?` selections so the
//! media-table strategies behave as they would against a real index.

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read};

use filepick_core::ResourceUri;

use crate::error::{ProviderError, ProviderResult};
use crate::row::{IndexValue, Row};
use crate::traits::{ContentIndex, ContentSource};

/// Provider double backed by in-memory tables.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    rows: HashMap<String, Vec<Row>>,
    blobs: HashMap<String, Vec<u8>>,
    mimes: HashMap<String, String>,
    failing: HashSet<String>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        MemoryProvider::default()
    }

    /// Register result rows for an identifier.
    pub fn add_rows(&mut self, uri: &str, rows: Vec<Row>) {
        self.rows.entry(uri.to_string()).or_default().extend(rows);
    }

    /// Register the byte content served for an identifier.
    pub fn add_blob(&mut self, uri: &str, bytes: Vec<u8>) {
        self.blobs.insert(uri.to_string(), bytes);
    }

    /// Register the provider-declared MIME type for an identifier.
    pub fn set_mime(&mut self, uri: &str, mime: &str) {
        self.mimes.insert(uri.to_string(), mime.to_string());
    }

    /// Make queries against an identifier fail, simulating an unreachable
    /// index.
    pub fn fail_queries_for(&mut self, uri: &str) {
        self.failing.insert(uri.to_string());
    }

    fn matches_selection(row: &Row, selection: &str, args: &[&str]) -> bool {
        // Supports the single shape the pipeline issues: "<col> = ?".
        let column = selection.split('=').next().map(str::trim).unwrap_or(selection);
        let Some(expected) = args.first() else {
            return true;
        };
        match row.get(column) {
            Some(IndexValue::Text(s)) => s == expected,
            Some(IndexValue::Integer(n)) => n.to_string() == *expected,
            _ => false,
        }
    }

    fn project(row: &Row, columns: &[&str]) -> Row {
        if columns.is_empty() {
            return row.clone();
        }
        columns.iter().fold(Row::new(), |acc, column| {
            match row.get(column) {
                Some(value) => acc.with(*column, value.clone()),
                None => acc,
            }
        })
    }
}

impl ContentIndex for MemoryProvider {
    fn query(
        &self,
        uri: &ResourceUri,
        columns: &[&str],
        selection: Option<&str>,
        args: &[&str],
    ) -> ProviderResult<Vec<Row>> {
        let key = uri.to_string();
        if self.failing.contains(&key) {
            return Err(ProviderError::QueryFailed(format!(
                "index unavailable for {key}"
            )));
        }
        let rows = self.rows.get(&key).cloned().unwrap_or_default();
        let filtered = rows
            .into_iter()
            .filter(|row| match selection {
                Some(sel) => Self::matches_selection(row, sel, args),
                None => true,
            })
            .map(|row| Self::project(&row, columns))
            .collect();
        Ok(filtered)
    }
}

impl ContentSource for MemoryProvider {
    fn open_read(&self, uri: &ResourceUri) -> ProviderResult<Box<dyn Read + Send>> {
        let key = uri.to_string();
        match self.blobs.get(&key) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
            None => Err(ProviderError::OpenFailed {
                uri: key,
                reason: "no content registered".to_string(),
            }),
        }
    }

    fn declared_mime(&self, uri: &ResourceUri) -> Option<String> {
        self.mimes.get(&uri.to_string()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::COLUMN_PATH;
    use crate::traits::query_string_column;

    fn media_uri() -> ResourceUri {
        ResourceUri::parse("content://media/external/images/media").unwrap()
    }

    #[test]
    fn selection_filters_rows() {
        let mut provider = MemoryProvider::new();
        provider.add_rows(
            "content://media/external/images/media",
            vec![
                Row::new()
                    .with("_id", IndexValue::Integer(1))
                    .with(COLUMN_PATH, IndexValue::Text("/sdcard/one.png".to_string())),
                Row::new()
                    .with("_id", IndexValue::Integer(2))
                    .with(COLUMN_PATH, IndexValue::Text("/sdcard/two.png".to_string())),
            ],
        );

        let path = query_string_column(
            &provider,
            &media_uri(),
            COLUMN_PATH,
            Some("_id = ?"),
            &["2"],
        );
        assert_eq!(path, Some("/sdcard/two.png".to_string()));
    }

    #[test]
    fn projection_drops_unrequested_columns() {
        let mut provider = MemoryProvider::new();
        provider.add_rows(
            "content://media/external/images/media",
            vec![Row::new()
                .with("_id", IndexValue::Integer(1))
                .with(COLUMN_PATH, IndexValue::Text("/sdcard/one.png".to_string()))],
        );

        let rows = provider
            .query(&media_uri(), &[COLUMN_PATH], None, &[])
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].get("_id").is_none());
        assert_eq!(rows[0].text(COLUMN_PATH), Some("/sdcard/one.png"));
    }

    #[test]
    fn unknown_uri_yields_empty_result_not_error() {
        let provider = MemoryProvider::new();
        assert!(provider
            .query(&media_uri(), &[COLUMN_PATH], None, &[])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn failing_uri_yields_query_error() {
        let mut provider = MemoryProvider::new();
        provider.fail_queries_for("content://media/external/images/media");
        assert!(provider
            .query(&media_uri(), &[COLUMN_PATH], None, &[])
            .is_err());
    }

    #[test]
    fn open_read_serves_registered_blob() {
        let mut provider = MemoryProvider::new();
        let uri = ResourceUri::parse("content://cloud/item/9").unwrap();
        provider.add_blob("content://cloud/item/9", b"hello".to_vec());

        let mut reader = provider.open_read(&uri).unwrap();
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"hello");

        let missing = ResourceUri::parse("content://cloud/item/10").unwrap();
        assert!(provider.open_read(&missing).is_err());
    }
}
