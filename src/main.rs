use anyhow::{Context, Result};
use clap::Parser;

use crate_edit::cli::CliArgs;
use crate_edit::config::EditorConfig;
use crate_edit::file_io;
use crate_edit::model::{AppModel, Document};
use crate_edit::runtime::App;
use crate_edit::signals::SignalFlags;
use crate_edit::terminal::Terminal;

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config();

    if let Err(e) = crate_edit::tracing::init() {
        eprintln!("Warning: Could not initialize file logging: {}", e);
    }
    tracing::info!("Starting crate-edit {}", env!("CARGO_PKG_VERSION"));

    let config = EditorConfig::load();

    // Load before touching the terminal so open errors print normally
    let document = match &startup.file {
        Some(path) => file_io::load(path, config.tab_stop)?,
        None => Document::with_tab_stop(config.tab_stop),
    };

    let signals = SignalFlags::register().context("failed to register signal handlers")?;
    let mut terminal = Terminal::enable_raw_mode().context("failed to enable raw mode")?;
    terminal.install_panic_hook();
    let (rows, cols) = terminal
        .window_size()
        .context("failed to determine window size")?;
    tracing::info!("Window size {}x{}", cols, rows);

    let model = AppModel::new(document, rows, cols, config);
    App::new(model, terminal, signals).run()
}
