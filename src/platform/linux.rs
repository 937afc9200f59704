// chromesweep platform paths for Linux
// Primary:  ~/.config/google-chrome/Default/History
// Fallback: ~/.config/chromium/Default/History

use std::env;
use std::path::PathBuf;

use crate::types::errors::CleanerError;

/// Returns the base config directory.
/// Uses `$XDG_CONFIG_HOME` if set, otherwise `~/.config`, which is where
/// both Chrome and Chromium keep their profiles.
fn config_base() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config")
    }
}

/// Returns the Chrome History path on Linux, falling back to Chromium's
/// when the Chrome profile directory does not hold one.
pub fn history_db_path() -> Result<PathBuf, CleanerError> {
    let base = config_base();
    let chrome = base.join("google-chrome").join("Default").join("History");
    let chromium = base.join("chromium").join("Default").join("History");
    Ok(resolve_with_fallback(chrome, chromium))
}

/// Returns `primary` when it exists on disk, otherwise `fallback`.
/// The fallback is returned even when it does not exist either; the caller
/// reports a missing file against whichever path won.
pub fn resolve_with_fallback(primary: PathBuf, fallback: PathBuf) -> PathBuf {
    if primary.exists() {
        primary
    } else {
        fallback
    }
}
