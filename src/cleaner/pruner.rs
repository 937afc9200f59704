//! Retention pruner for chromesweep.
//!
//! Implements `HistoryPrunerTrait` — deleting visits older than a retention
//! window, removing URL rows left without any referencing visit, and
//! compacting the file, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cleaner::timestamp;
use crate::types::errors::CleanerError;
use crate::types::report::CleanupReport;

/// Trait defining history pruning operations.
pub trait HistoryPrunerTrait {
    fn prune(&mut self, retention_days: u64) -> Result<CleanupReport, CleanerError>;
    fn vacuum(&self) -> Result<(), CleanerError>;
}

/// History pruner backed by a SQLite connection.
pub struct HistoryPruner<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryPruner<'a> {
    /// Creates a new `HistoryPruner` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Prunes everything older than an explicit WebKit-epoch cutoff.
    ///
    /// Both deletes run inside one transaction: visits first, then URLs no
    /// longer referenced by any visit. The order is load-bearing — orphan
    /// status depends on the post-prune visit set. Nothing is committed if
    /// either statement fails.
    ///
    /// # Errors
    /// Returns [`CleanerError::SchemaMismatch`] before touching any row
    /// when the expected tables or columns are absent, and the usual
    /// `Locked` / `Database` errors for SQLite failures.
    pub fn prune_before(
        &mut self,
        threshold_webkit_micros: i64,
        retention_days: u64,
    ) -> Result<CleanupReport, CleanerError> {
        self.check_schema()?;

        let tx = self.conn.unchecked_transaction()?;
        let visits_deleted = tx.execute(
            "DELETE FROM visits WHERE visit_time < ?1",
            params![threshold_webkit_micros],
        )?;
        let urls_deleted = tx.execute(
            "DELETE FROM urls WHERE id NOT IN (SELECT url FROM visits)",
            [],
        )?;
        tx.commit()?;

        Ok(CleanupReport {
            visits_deleted,
            urls_deleted,
            retention_days,
            threshold_webkit_micros,
        })
    }

    /// Verifies that the columns the delete statements rely on exist.
    ///
    /// Chrome has renamed columns across versions; without this probe a
    /// renamed `visits.url` would turn the orphan delete into a silent
    /// no-op instead of an error.
    fn check_schema(&self) -> Result<(), CleanerError> {
        let probes = [
            ("visits", "SELECT url, visit_time FROM visits LIMIT 0"),
            ("urls", "SELECT id FROM urls LIMIT 0"),
        ];
        for (table, probe) in probes {
            // A busy/locked failure here is not a schema problem; let it
            // keep its "close Chrome" guidance
            self.conn.prepare(probe).map_err(|e| match CleanerError::from(e) {
                CleanerError::Database(msg) => {
                    CleanerError::SchemaMismatch(format!("{}: {}", table, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

impl HistoryPrunerTrait for HistoryPruner<'_> {
    /// Prunes visits older than `retention_days` days before now, then
    /// removes orphaned URL rows. Returns the counts of both deletes.
    fn prune(&mut self, retention_days: u64) -> Result<CleanupReport, CleanerError> {
        let threshold = timestamp::retention_threshold(Self::now(), retention_days);
        self.prune_before(threshold, retention_days)
    }

    /// Rewrites the database file to reclaim space freed by deleted rows.
    /// Must run outside the prune transaction — SQLite refuses to VACUUM
    /// inside one.
    fn vacuum(&self) -> Result<(), CleanerError> {
        self.conn.execute_batch("VACUUM")?;
        Ok(())
    }
}
