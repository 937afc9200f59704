//! Minimal Chrome-shaped history schema.
//!
//! Chrome owns the real `History` schema; this module only reproduces the
//! subset the pruner touches — `urls` and `visits` — so that in-memory
//! databases and file fixtures in tests behave like the real thing.
//! `visits.url` references `urls.id`, and `visits.visit_time` is in
//! microseconds since the WebKit epoch (1601-01-01).

use rusqlite::Connection;

/// Creates the `urls` and `visits` tables and the visit-time index.
///
/// Uses `CREATE TABLE IF NOT EXISTS` and `CREATE INDEX IF NOT EXISTS` so
/// the function is idempotent.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn create_history_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS urls (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            url LONGVARCHAR,
            title LONGVARCHAR,
            visit_count INTEGER DEFAULT 0 NOT NULL,
            last_visit_time INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS visits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            url INTEGER NOT NULL,
            visit_time INTEGER NOT NULL,
            from_visit INTEGER
        );

        CREATE INDEX IF NOT EXISTS visits_time_index ON visits(visit_time);
        ",
    )
}
