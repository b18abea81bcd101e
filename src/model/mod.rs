//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! One `AppModel` is owned by the runtime loop and handed by reference to
//! `update` and to the view; nothing here is global.

pub mod document;
pub mod editor;
pub mod row;
pub mod status_bar;
pub mod ui;

pub use document::Document;
pub use editor::{Cursor, EditorState, Viewport};
pub use row::{Row, DEFAULT_TAB_STOP};
pub use status_bar::StatusMessage;
pub use ui::{QuitGuard, UiState};

use std::time::Duration;

use crate::config::EditorConfig;

/// Message shown when the editor starts
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The single open document
    pub document: Document,
    /// Cursor and viewport
    pub editor: EditorState,
    /// Message bar and quit confirmation
    pub ui: UiState,
    /// Loaded editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a new application model for a terminal of `rows × cols`
    pub fn new(document: Document, rows: usize, cols: usize, config: EditorConfig) -> Self {
        let mut ui = UiState::new(config.quit_times);
        ui.set_status(HELP_MESSAGE);
        Self {
            document,
            editor: EditorState::new(Viewport::for_terminal(rows, cols)),
            ui,
            config,
        }
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[inline]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[inline]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    #[inline]
    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.editor.cursor
    }

    /// Resize the text area to a new terminal size
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let vp = Viewport::for_terminal(rows, cols);
        self.editor.resize_viewport(vp.screenrows, vp.screencols);
    }

    /// Recompute `rx` and bring the viewport back around the cursor
    pub fn scroll(&mut self) {
        self.editor.scroll(&self.document);
    }

    /// How long status messages stay on screen
    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.config.status_message_secs)
    }
}
