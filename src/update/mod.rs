//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Only consecutive quit presses count toward the confirmation; resize and
    // save feedback are not key presses
    if !matches!(
        msg,
        Msg::App(AppMsg::Quit | AppMsg::SaveCompleted(_) | AppMsg::Resize(..))
    ) {
        model.ui.quit_guard.reset();
    }

    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::App(m) => app::update_app(model, m),
        Msg::Noop => None,
    }
}

/// Update with a debug span, message log, and cursor diff
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = model.cursor();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = model.cursor();
    if before != after {
        debug!(
            target: "cursor",
            "({},{}) → ({},{})",
            before.cx,
            before.cy,
            after.cx,
            after.cy
        );
    }
    model.editor.assert_invariants(&model.document);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Editor::MoveCursor(Up)`
/// - `Document::InsertChar(120)`
/// - `App::Resize(24, 80)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
        Msg::Noop => "Noop".to_string(),
    }
}
