//! SQLite connection management for chromesweep.
//!
//! Provides the [`HistoryDatabase`] struct that wraps a
//! `rusqlite::Connection` opened against Chrome's History file.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use super::schema;
use crate::types::errors::CleanerError;

/// Core database wrapper providing SQLite connection management.
///
/// The `HistoryDatabase` struct owns a `rusqlite::Connection` to an
/// existing Chrome History file. The connection is released when the value
/// is dropped, on every exit path, success or failure.
pub struct HistoryDatabase {
    conn: Connection,
}

impl HistoryDatabase {
    /// Opens the history database at the given file path, read-write.
    ///
    /// The file must already exist — Chrome owns it, and creating an empty
    /// database where the History file should be would mask a bad path.
    ///
    /// # Errors
    /// Returns [`CleanerError::Locked`] when another process (usually
    /// Chrome itself) holds the file, and [`CleanerError::Database`] for
    /// any other open failure, including a missing file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CleanerError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Opens an in-memory SQLite database with the Chrome-shaped test schema.
    ///
    /// Useful for testing — the database is discarded when the
    /// `HistoryDatabase` is dropped.
    ///
    /// # Errors
    /// Returns [`CleanerError::Database`] if the connection cannot be
    /// established or the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, CleanerError> {
        let conn = Connection::open_in_memory()?;
        schema::create_history_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    ///
    /// This allows the pruner to execute statements against the database.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
