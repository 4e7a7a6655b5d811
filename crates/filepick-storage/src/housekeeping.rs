//! Directory creation and file deletion helpers.
//!
//! Both helpers collapse every failure into a boolean, matching the contract
//! callers rely on: `false` means "operation did not complete", with no
//! distinction between a missing file and a failed removal. The swallowed
//! cause goes to the log so it is not lost entirely.

use std::fs;
use std::path::Path;

/// Ensure a directory exists, creating it (and any missing parents) if
/// needed. Idempotent: returns `true` when the directory is already present.
pub fn ensure_dir(path: &Path) -> bool {
    if path.is_dir() {
        return true;
    }
    match fs::create_dir_all(path) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to create directory"
            );
            false
        }
    }
}

/// Delete a file. Returns `true` only if the file existed and was removed.
pub fn delete_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to delete file"
            );
            false
        }
    }
}
