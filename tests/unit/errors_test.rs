use chromesweep::types::errors::*;

// === Display Tests ===

#[test]
fn missing_env_var_display() {
    let err = CleanerError::MissingEnvVar("LOCALAPPDATA".to_string());
    assert_eq!(
        err.to_string(),
        "Could not find LOCALAPPDATA environment variable"
    );
}

#[test]
fn history_not_found_display() {
    let err = CleanerError::HistoryNotFound("/home/user/.config/chromium/Default/History".to_string());
    assert_eq!(
        err.to_string(),
        "Chrome History file not found at: /home/user/.config/chromium/Default/History"
    );
}

#[test]
fn locked_display_advises_closing_chrome() {
    let err = CleanerError::Locked("database is locked".to_string());
    let msg = err.to_string();
    assert!(msg.contains("database is locked"));
    assert!(
        msg.contains("Chrome is fully closed"),
        "Locked error should tell the user to close Chrome: {}",
        msg
    );
}

#[test]
fn database_display() {
    let err = CleanerError::Database("no such table: visits".to_string());
    assert_eq!(err.to_string(), "History database error: no such table: visits");
}

#[test]
fn schema_mismatch_display() {
    let err = CleanerError::SchemaMismatch("visits: no such column: url".to_string());
    assert_eq!(
        err.to_string(),
        "Unexpected history schema: visits: no such column: url"
    );
}

#[test]
fn backup_display() {
    let err = CleanerError::Backup("/tmp/History.bak: permission denied".to_string());
    assert_eq!(
        err.to_string(),
        "Backup failed: /tmp/History.bak: permission denied"
    );
}

#[test]
fn cleaner_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(CleanerError::Database("oops".to_string()));
    assert!(err.source().is_none());
}

// === rusqlite conversion Tests ===

#[test]
fn busy_sqlite_error_maps_to_locked() {
    let sqlite_err = rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
        Some("database is locked".to_string()),
    );
    let err = CleanerError::from(sqlite_err);
    assert!(matches!(err, CleanerError::Locked(_)), "got {:?}", err);
}

#[test]
fn locked_sqlite_error_maps_to_locked() {
    let sqlite_err = rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
        Some("database table is locked".to_string()),
    );
    let err = CleanerError::from(sqlite_err);
    assert!(matches!(err, CleanerError::Locked(_)), "got {:?}", err);
}

#[test]
fn other_sqlite_error_maps_to_database() {
    let err = CleanerError::from(rusqlite::Error::InvalidQuery);
    assert!(matches!(err, CleanerError::Database(_)), "got {:?}", err);
}
