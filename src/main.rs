//! chromesweep — prunes Chrome's local browsing history older than a retention window.
//!
//! Entry point: resolves the Chrome History path for the host OS, backs it
//! up once, deletes old visits and orphaned URLs, and compacts the file.
//! Takes no arguments; every failure is caught here, printed to stdout,
//! and the run ends without re-raising.

use chromesweep::cleaner::{ensure_backup, HistoryPruner, HistoryPrunerTrait};
use chromesweep::database::HistoryDatabase;
use chromesweep::platform;
use chromesweep::types::errors::CleanerError;
use chromesweep::types::report::BackupOutcome;

/// Retention window applied on every run.
const DEFAULT_RETENTION_DAYS: u64 = 7;

fn main() {
    println!(
        "Clearing Chrome browsing history older than the last {} days...",
        DEFAULT_RETENTION_DAYS
    );
    if let Err(e) = run(DEFAULT_RETENTION_DAYS) {
        println!("An error occurred: {}", e);
    }
    println!("Done.");
}

fn run(retention_days: u64) -> Result<(), CleanerError> {
    let history_path = platform::history_db_path()?;
    if !history_path.exists() {
        // Nothing to prune; report and end the run cleanly
        println!(
            "{}",
            CleanerError::HistoryNotFound(history_path.display().to_string())
        );
        return Ok(());
    }

    match ensure_backup(&history_path)? {
        BackupOutcome::Created(bak) => {
            println!("Backup of History file created at: {}", bak.display());
        }
        BackupOutcome::AlreadyExists(bak) => {
            println!("Backup already exists at: {}", bak.display());
        }
    }

    // The connection closes when `db` drops, on every exit path below
    let db = HistoryDatabase::open(&history_path)?;
    let mut pruner = HistoryPruner::new(db.connection());

    let report = pruner.prune(retention_days)?;
    println!(
        "Deleted {} visits older than {} days.",
        report.visits_deleted, report.retention_days
    );
    println!("Deleted {} orphan URLs.", report.urls_deleted);

    pruner.vacuum()?;
    println!("Database vacuumed to optimize size.");

    println!(
        "Summary: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );
    Ok(())
}
