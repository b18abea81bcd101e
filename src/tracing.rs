//! Logging setup
//!
//! The terminal is owned by the editor while it runs, so logs go to a file
//! only: `~/.config/crate-edit/logs/crate-edit.log`, rotated daily.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,cursor=debug` - dispatched messages and cursor moves
//! - `RUST_LOG=crate_edit::input=trace` - every decoded key

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};

/// Initialize tracing with a daily-rotated file layer
///
/// Returns an error message when the log directory cannot be created; the
/// editor then runs without logging.
pub fn init() -> Result<(), String> {
    let logs_dir = ensure_logs_dir()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {}", e))
}
