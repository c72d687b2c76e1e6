// ReadHub platform paths for macOS
// Config: ~/Library/Application Support/ReadHub
// Data:   ~/Library/Application Support/ReadHub

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for ReadHub on macOS.
/// `~/Library/Application Support/ReadHub`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("ReadHub")
}

/// Returns the data directory for ReadHub on macOS.
/// `~/Library/Application Support/ReadHub`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("ReadHub")
}
