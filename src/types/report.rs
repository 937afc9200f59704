use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of the one-shot backup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// A fresh `.bak` copy was written at the contained path.
    Created(PathBuf),
    /// A `.bak` file was already present and was left untouched.
    AlreadyExists(PathBuf),
}

impl BackupOutcome {
    /// The backup file path, regardless of whether this run created it.
    pub fn path(&self) -> &Path {
        match self {
            BackupOutcome::Created(p) | BackupOutcome::AlreadyExists(p) => p,
        }
    }
}

/// Summary of a single pruning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Visit rows deleted for being older than the retention threshold.
    pub visits_deleted: usize,
    /// URL rows deleted for having no remaining referencing visits.
    pub urls_deleted: usize,
    /// The retention window the run was invoked with, in days.
    pub retention_days: u64,
    /// The cutoff used against `visits.visit_time`, in microseconds since
    /// the WebKit epoch (1601-01-01).
    pub threshold_webkit_micros: i64,
}
