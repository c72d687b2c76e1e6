// ReadHub platform paths for Linux
// Config: ~/.config/readhub
// Data:   ~/.local/share/readhub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for ReadHub on Linux.
/// Uses `$XDG_CONFIG_HOME/readhub` if set, otherwise `~/.config/readhub`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("readhub")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("readhub")
    }
}

/// Returns the data directory for ReadHub on Linux.
/// Uses `$XDG_DATA_HOME/readhub` if set, otherwise `~/.local/share/readhub`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("readhub")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("readhub")
    }
}
