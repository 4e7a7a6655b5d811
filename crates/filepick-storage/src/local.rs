//! Stream copier into the app-private directory.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::housekeeping::ensure_dir;

const COPY_CHUNK_SIZE: usize = 4096;

/// App-private directory that stream copies land in.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy a source stream into the store and return the new local path.
    ///
    /// The destination name is the caller-supplied display name when one is
    /// available and safe; otherwise a generated `file_<epoch-millis>` name.
    /// Display names come from an untrusted provider column, so a name that
    /// could escape the store root (path separators, `..` sequences) is
    /// discarded in favor of the generated name: every copy lands directly
    /// inside the root. A display-named destination overwrites an existing
    /// file of the same name (supplying the name is the caller's intent);
    /// generated names are opened with `create_new` and re-stamped on
    /// collision, so two concurrent nameless copies always land in distinct
    /// files.
    ///
    /// The copy runs in 4096-byte chunks to end-of-stream. On any read or
    /// write failure the error is returned and the partial destination file
    /// is left on disk; the partial path is never reported as success.
    pub fn write_stream(
        &self,
        reader: &mut (dyn Read + '_),
        display_name: Option<&str>,
    ) -> StoreResult<PathBuf> {
        if !ensure_dir(&self.root) {
            return Err(StoreError::CreateDirFailed {
                path: self.root.clone(),
                reason: "directory could not be created".to_string(),
            });
        }

        let start = std::time::Instant::now();
        let (path, mut file) = match display_name.and_then(|name| self.checked_name(name)) {
            Some(name) => {
                let path = self.root.join(name);
                let file = File::create(&path).map_err(|e| StoreError::CreateFileFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                (path, file)
            }
            None => self.create_generated()?,
        };

        let mut buffer = [0u8; COPY_CHUNK_SIZE];
        let mut bytes_written: u64 = 0;
        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(StoreError::CopyFailed {
                        path,
                        bytes_written,
                        reason: format!("read failed: {e}"),
                    });
                }
            };
            if let Err(e) = file.write_all(&buffer[..read]) {
                return Err(StoreError::CopyFailed {
                    path,
                    bytes_written,
                    reason: format!("write failed: {e}"),
                });
            }
            bytes_written += read as u64;
        }

        tracing::info!(
            path = %path.display(),
            size_bytes = bytes_written,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Copied stream into local store"
        );

        Ok(path)
    }

    /// Accept a display name only if it names a plain file directly under
    /// the store root. Separators and `..` sequences disqualify it.
    fn checked_name<'a>(&self, name: &'a str) -> Option<&'a str> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            tracing::warn!(
                name = %name,
                root = %self.root.display(),
                "Rejected display name that could escape the store root"
            );
            return None;
        }
        Some(name)
    }

    /// Create a destination file under a generated timestamp name, bumping
    /// the stamp until an unused name is found.
    fn create_generated(&self) -> StoreResult<(PathBuf, File)> {
        let base = Utc::now().timestamp_millis();
        for attempt in 0.. {
            let path = self.root.join(format!("file_{}", base + attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(StoreError::CreateFileFailed {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
        unreachable!("generated-name search either returns or errors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn copies_full_content_without_truncation() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(temp.path().join("private"));

        let source: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let path = store
            .write_stream(&mut Cursor::new(source.clone()), Some("payload.bin"))
            .unwrap();

        let copied = std::fs::read(&path).unwrap();
        assert_eq!(copied.len(), 10_000);
        assert_eq!(copied, source);
        assert_eq!(path.file_name().unwrap(), "payload.bin");
    }

    #[test]
    fn creates_missing_target_directory() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a/b/private");
        let store = LocalStore::new(&nested);

        store
            .write_stream(&mut Cursor::new(b"x".to_vec()), Some("one.txt"))
            .unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn generated_names_never_collide() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(temp.path());

        let first = store
            .write_stream(&mut Cursor::new(b"a".to_vec()), None)
            .unwrap();
        let second = store
            .write_stream(&mut Cursor::new(b"b".to_vec()), None)
            .unwrap();

        assert_ne!(first, second);
        assert!(first
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("file_"));
        assert_eq!(std::fs::read(&first).unwrap(), b"a");
        assert_eq!(std::fs::read(&second).unwrap(), b"b");
    }

    #[test]
    fn traversal_display_name_is_replaced_by_generated_name() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("private");
        let store = LocalStore::new(&root);

        let path = store
            .write_stream(&mut Cursor::new(b"owned".to_vec()), Some("../escaped.txt"))
            .unwrap();

        assert!(path.starts_with(&root), "copy left the store root: {}", path.display());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("file_"));
        assert!(!temp.path().join("escaped.txt").exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"owned");
    }

    #[test]
    fn nested_display_name_is_replaced_by_generated_name() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(temp.path().join("private"));

        let path = store
            .write_stream(&mut Cursor::new(b"x".to_vec()), Some("nested/dir.txt"))
            .unwrap();

        assert_eq!(path.parent().unwrap(), temp.path().join("private"));
        assert!(!temp.path().join("private/nested").exists());
    }

    #[test]
    fn concurrent_generated_copies_yield_distinct_files() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(temp.path());

        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store
                        .write_stream(&mut Cursor::new(vec![i; 16]), None)
                        .unwrap()
                })
            })
            .collect();

        let mut paths: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }

    struct BrokenReader {
        remaining: usize,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::other("stream revoked"));
            }
            let n = self.remaining.min(buf.len());
            buf[..n].fill(7);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn mid_copy_failure_is_an_error_and_leaves_partial_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(temp.path());

        let err = store
            .write_stream(&mut BrokenReader { remaining: 6000 }, Some("broken.bin"))
            .unwrap_err();

        match err {
            StoreError::CopyFailed { bytes_written, .. } => assert_eq!(bytes_written, 6000),
            other => panic!("unexpected error: {other}"),
        }
        // Failure is not transactional: the partial file stays behind.
        let partial = temp.path().join("broken.bin");
        assert_eq!(std::fs::metadata(&partial).unwrap().len(), 6000);
    }

    #[test]
    fn display_name_overwrites_previous_copy() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalStore::new(temp.path());

        store
            .write_stream(&mut Cursor::new(b"first".to_vec()), Some("same.txt"))
            .unwrap();
        let path = store
            .write_stream(&mut Cursor::new(b"second".to_vec()), Some("same.txt"))
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
