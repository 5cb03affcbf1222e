// Bookmarky platform paths for Windows
// Data: %APPDATA%/Bookmarky

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Bookmarky on Windows.
/// Uses `%APPDATA%/Bookmarky`, falling back to `C:\Temp` if APPDATA is unset.
pub fn get_data_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("Bookmarky")
}
