// ReadHub platform paths for Windows
// Config: %APPDATA%/ReadHub
// Data:   %APPDATA%/ReadHub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for ReadHub on Windows.
/// `%APPDATA%/ReadHub`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("ReadHub")
}

/// Returns the data directory for ReadHub on Windows.
/// `%APPDATA%/ReadHub`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("ReadHub")
}
