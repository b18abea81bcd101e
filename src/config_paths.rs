//! Centralized configuration paths for crate-edit
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/crate-edit/`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "crate-edit";

/// Base name of the rolling log file
pub const LOG_FILE_PREFIX: &str = "crate-edit.log";

/// Base config directory for crate-edit
///
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/crate-edit`
///   - Else: `~/.config/crate-edit`
pub fn config_dir() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|config| config.join(APP_DIR))
}

/// `~/.config/crate-edit/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/crate-edit/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
