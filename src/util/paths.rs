//! Path utilities for audiocli data directories

use std::path::PathBuf;

/// Get the base data directory (~/.audiocli)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".audiocli"))
        .unwrap_or_else(|| PathBuf::from(".audiocli"))
}

/// Get the config file path (~/.audiocli/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
