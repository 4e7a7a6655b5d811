//! Support code for the filepick CLI: tracing setup and the JSON manifest
//! that seeds an in-memory provider with canned rows, blobs, and declared
//! MIME types.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use filepick_provider::{IndexValue, MemoryProvider, Row};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Initialize tracing for the CLI binary. Respects `RUST_LOG`, defaults to
/// `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Provider fixture loaded from a JSON file.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub rows: Vec<ManifestRow>,
    #[serde(default)]
    pub blobs: Vec<ManifestBlob>,
    #[serde(default)]
    pub mimes: HashMap<String, String>,
}

/// Canned index rows for one identifier.
#[derive(Debug, Deserialize)]
pub struct ManifestRow {
    pub uri: String,
    pub columns: HashMap<String, JsonValue>,
}

/// Byte content for one identifier: inline text or a file on disk.
#[derive(Debug, Deserialize)]
pub struct ManifestBlob {
    pub uri: String,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl Manifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    /// Build the provider the manifest describes.
    pub fn into_provider(self) -> anyhow::Result<MemoryProvider> {
        let mut provider = MemoryProvider::new();

        for entry in self.rows {
            let row = entry
                .columns
                .into_iter()
                .fold(Row::new(), |row, (column, value)| {
                    row.with(column, json_to_index_value(value))
                });
            provider.add_rows(&entry.uri, vec![row]);
        }

        for blob in self.blobs {
            let bytes = match (blob.text, blob.file) {
                (Some(text), _) => text.into_bytes(),
                (None, Some(file)) => fs::read(&file)
                    .with_context(|| format!("Failed to read blob file {}", file.display()))?,
                (None, None) => {
                    anyhow::bail!("Blob for {} has neither text nor file", blob.uri)
                }
            };
            provider.add_blob(&blob.uri, bytes);
        }

        for (uri, mime) in self.mimes {
            provider.set_mime(&uri, &mime);
        }

        Ok(provider)
    }
}

fn json_to_index_value(value: JsonValue) -> IndexValue {
    match value {
        JsonValue::String(s) => IndexValue::Text(s),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => IndexValue::Integer(i),
            None => IndexValue::Text(n.to_string()),
        },
        JsonValue::Null => IndexValue::Null,
        other => IndexValue::Text(other.to_string()),
    }
}
