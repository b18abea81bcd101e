//! Editor configuration
//!
//! Loads user preferences from `~/.config/crate-edit/config.yaml`

use std::path::Path;

use serde::Deserialize;

use crate::model::{row::DEFAULT_TAB_STOP, ui::DEFAULT_QUIT_TIMES};

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Column interval a tab advances to
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,
    /// Quit presses required when the document has unsaved changes
    #[serde(default = "default_quit_times")]
    pub quit_times: u8,
    /// Seconds a status message stays visible
    #[serde(default = "default_status_message_secs")]
    pub status_message_secs: u64,
}

fn default_tab_stop() -> usize {
    DEFAULT_TAB_STOP
}

fn default_quit_times() -> u8 {
    DEFAULT_QUIT_TIMES
}

fn default_status_message_secs() -> u64 {
    5
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            quit_times: default_quit_times(),
            status_message_secs: default_status_message_secs(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.normalized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break rendering or quitting
    pub fn normalized(mut self) -> Self {
        self.tab_stop = self.tab_stop.max(1);
        self.quit_times = self.quit_times.max(1);
        self
    }
}
