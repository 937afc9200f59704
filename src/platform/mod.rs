// chromesweep platform abstraction
// Resolves the Chrome default-profile History file path for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time. Any non-Apple unix
// target takes the Linux branch, matching Chrome's own packaging.

use std::path::PathBuf;

use crate::types::errors::CleanerError;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the absolute path to Chrome's default-profile History database.
///
/// - **Linux**: `~/.config/google-chrome/Default/History`, falling back to
///   `~/.config/chromium/Default/History` when the primary does not exist
/// - **macOS**: `~/Library/Application Support/Google/Chrome/Default/History`
/// - **Windows**: `%LOCALAPPDATA%\Google\Chrome\User Data\Default\History`
///
/// # Errors
/// On Windows, returns [`CleanerError::MissingEnvVar`] when `LOCALAPPDATA`
/// is not set. The other platforms cannot fail here; a nonexistent file is
/// detected by the caller, not by path resolution.
pub fn history_db_path() -> Result<PathBuf, CleanerError> {
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        linux::history_db_path()
    }
    #[cfg(target_os = "macos")]
    {
        macos::history_db_path()
    }
    #[cfg(target_os = "windows")]
    {
        windows::history_db_path()
    }
}
