//! Where cellsync keeps its config file and logs
//!
//! Everything lives under `$XDG_CONFIG_HOME/cellsync/`, defaulting to
//! `~/.config/cellsync/`. Platforms without a home directory fall back to
//! the OS config directory.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "cellsync";

/// Base config directory for cellsync
pub fn config_dir() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
        .map(|base| base.join(APP_DIR))
}

/// `config.yaml` inside [`config_dir`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Directory for the daily rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create [`logs_dir`] if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
