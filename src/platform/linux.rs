// Bookmarky platform paths for Linux
// Data: ~/.local/share/bookmarky

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Bookmarky on Linux.
/// Uses `$XDG_DATA_HOME/bookmarky` if set, otherwise `~/.local/share/bookmarky`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("bookmarky")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("bookmarky")
    }
}
