//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Side effects requested by `update`, executed by the runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the frame
    Redraw,
    /// Write serialized document bytes to disk
    SaveFile { path: PathBuf, content: Vec<u8> },
    /// Leave the main loop and restore the terminal
    Quit,
}
