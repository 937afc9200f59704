// chromesweep shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod report;

pub use errors::CleanerError;
pub use report::{BackupOutcome, CleanupReport};
