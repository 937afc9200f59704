// chromesweep platform paths for Windows
// History: %LOCALAPPDATA%\Google\Chrome\User Data\Default\History

use std::env;
use std::path::PathBuf;

use crate::types::errors::CleanerError;

/// Returns the Chrome History path on Windows.
/// `%LOCALAPPDATA%\Google\Chrome\User Data\Default\History`
///
/// # Errors
/// Returns [`CleanerError::MissingEnvVar`] when `LOCALAPPDATA` is not set.
/// There is no sensible fallback here; guessing a profile directory risks
/// backing up and pruning the wrong user's data.
pub fn history_db_path() -> Result<PathBuf, CleanerError> {
    let local_appdata = env::var("LOCALAPPDATA")
        .map_err(|_| CleanerError::MissingEnvVar("LOCALAPPDATA".to_string()))?;
    Ok(PathBuf::from(local_appdata)
        .join("Google")
        .join("Chrome")
        .join("User Data")
        .join("Default")
        .join("History"))
}
