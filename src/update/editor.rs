//! Editor update functions for cursor movement and paging.

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::AppModel;

/// Handle editor messages (cursor movement)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let AppModel {
        document, editor, ..
    } = model;

    match msg {
        EditorMsg::MoveCursor(direction) => editor.move_cursor(document, direction),
        EditorMsg::MoveCursorLineStart => editor.move_cursor_line_start(),
        EditorMsg::MoveCursorLineEnd => editor.move_cursor_line_end(document),
        EditorMsg::PageUp => editor.page_up(document),
        EditorMsg::PageDown => editor.page_down(document),
    }

    Some(Cmd::Redraw)
}
