// chromesweep platform paths for macOS
// History: ~/Library/Application Support/Google/Chrome/Default/History

use std::env;
use std::path::PathBuf;

use crate::types::errors::CleanerError;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the Chrome History path on macOS.
/// `~/Library/Application Support/Google/Chrome/Default/History`
pub fn history_db_path() -> Result<PathBuf, CleanerError> {
    Ok(home_dir()
        .join("Library")
        .join("Application Support")
        .join("Google")
        .join("Chrome")
        .join("Default")
        .join("History"))
}
