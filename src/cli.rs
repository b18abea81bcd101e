//! Command-line argument parsing for the editor

use clap::Parser;
use std::path::PathBuf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "crate-edit", version, about = "A small terminal text editor")]
pub struct CliArgs {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// File to open, or None for an empty unnamed document
    pub file: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        StartupConfig { file: self.path }
    }
}
