//! Unit tests for the one-shot backup step.
//!
//! The backup must be created exactly once: a second invocation never
//! overwrites an existing `.bak` file, even when the source has changed.

use chromesweep::cleaner::backup::{backup_path, ensure_backup};
use chromesweep::types::errors::CleanerError;
use chromesweep::types::report::BackupOutcome;
use std::fs;
use std::path::PathBuf;

/// Helper: create a temp dir containing a fake History file.
fn setup(contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("History");
    fs::write(&path, contents).expect("write fixture failed");
    (dir, path)
}

#[test]
fn test_first_run_creates_backup() {
    let (_dir, path) = setup(b"original history bytes");

    let outcome = ensure_backup(&path).expect("backup should succeed");
    let bak = backup_path(&path);

    assert_eq!(outcome, BackupOutcome::Created(bak.clone()));
    assert_eq!(fs::read(&bak).unwrap(), b"original history bytes");
}

#[test]
fn test_second_run_is_a_noop() {
    let (_dir, path) = setup(b"original history bytes");

    ensure_backup(&path).expect("first backup should succeed");

    // Mutate the source, then run again — the backup must keep the
    // pre-first-run bytes
    fs::write(&path, b"pruned history bytes").unwrap();
    let outcome = ensure_backup(&path).expect("second backup call should succeed");

    let bak = backup_path(&path);
    assert_eq!(outcome, BackupOutcome::AlreadyExists(bak.clone()));
    assert_eq!(
        fs::read(&bak).unwrap(),
        b"original history bytes",
        "Existing backup must never be overwritten"
    );
}

#[test]
fn test_outcome_path_accessor() {
    let (_dir, path) = setup(b"x");
    let outcome = ensure_backup(&path).unwrap();
    assert_eq!(outcome.path(), backup_path(&path));
}

#[test]
fn test_missing_source_is_backup_error() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("History");

    let result = ensure_backup(&path);
    assert!(
        matches!(result, Err(CleanerError::Backup(_))),
        "Backing up a missing file should fail with a Backup error"
    );
    assert!(!backup_path(&path).exists(), "No .bak should appear on failure");
}

#[test]
fn test_existing_backup_short_circuits_missing_source() {
    // Once a .bak exists, ensure_backup does not even look at the source.
    // The run that follows will report the missing History file instead.
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("History");
    fs::write(backup_path(&path), b"old backup").unwrap();

    let outcome = ensure_backup(&path).expect("should be a no-op");
    assert!(matches!(outcome, BackupOutcome::AlreadyExists(_)));
}
