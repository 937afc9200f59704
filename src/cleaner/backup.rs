//! One-shot backup of the history file.
//!
//! The backup is a safety net taken before the first pruning run ever
//! touches the database, not a rotating scheme: once `<path>.bak` exists
//! it is never overwritten, so it always preserves the pre-first-run state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::CleanerError;
use crate::types::report::BackupOutcome;

/// Returns the sibling backup path for a history file: `<path>.bak`.
///
/// The `.bak` suffix is appended to the full file name rather than
/// replacing an extension — Chrome's History file has none to replace.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copies `path` to `<path>.bak` unless the backup already exists.
///
/// `fs::copy` carries the source's permission bits over to the copy.
/// An existing backup is never touched, whatever its contents.
///
/// # Errors
/// Returns [`CleanerError::Backup`] when the copy fails (missing source,
/// unwritable directory, disk full).
pub fn ensure_backup(path: &Path) -> Result<BackupOutcome, CleanerError> {
    let bak = backup_path(path);
    if bak.exists() {
        return Ok(BackupOutcome::AlreadyExists(bak));
    }
    fs::copy(path, &bak)
        .map_err(|e| CleanerError::Backup(format!("{}: {}", bak.display(), e)))?;
    Ok(BackupOutcome::Created(bak))
}
