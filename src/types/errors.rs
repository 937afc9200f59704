use std::fmt;

// === CleanerError ===

/// Errors raised while locating, backing up, or pruning the history database.
#[derive(Debug)]
pub enum CleanerError {
    /// A required environment variable is not set (Windows path resolution).
    MissingEnvVar(String),
    /// The resolved history file does not exist on disk.
    HistoryNotFound(String),
    /// The history database is locked by another process (usually Chrome).
    Locked(String),
    /// Any other database operation failure.
    Database(String),
    /// The live schema is missing a table or column this tool relies on.
    SchemaMismatch(String),
    /// Copying the history file to its backup path failed.
    Backup(String),
}

impl fmt::Display for CleanerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanerError::MissingEnvVar(var) => {
                write!(f, "Could not find {} environment variable", var)
            }
            CleanerError::HistoryNotFound(path) => {
                write!(f, "Chrome History file not found at: {}", path)
            }
            CleanerError::Locked(msg) => write!(
                f,
                "History database is locked: {}. Please ensure Chrome is fully closed before running again.",
                msg
            ),
            CleanerError::Database(msg) => write!(f, "History database error: {}", msg),
            CleanerError::SchemaMismatch(msg) => {
                write!(f, "Unexpected history schema: {}", msg)
            }
            CleanerError::Backup(msg) => write!(f, "Backup failed: {}", msg),
        }
    }
}

impl std::error::Error for CleanerError {}

impl From<rusqlite::Error> for CleanerError {
    /// Maps SQLITE_BUSY / SQLITE_LOCKED to [`CleanerError::Locked`] so the
    /// "close Chrome" guidance reaches the user; everything else becomes
    /// [`CleanerError::Database`].
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if matches!(
                    e.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                CleanerError::Locked(err.to_string())
            }
            _ => CleanerError::Database(err.to_string()),
        }
    }
}
