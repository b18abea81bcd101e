//! Document update functions for text editing.

use crate::commands::Cmd;
use crate::messages::{Direction, DocumentMsg};
use crate::model::AppModel;

/// Handle document messages (insert and delete)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            let cursor = model.cursor();
            model.document.insert_char(cursor.cy, cursor.cx, ch);
            model.editor.cursor.cx += 1;
        }

        DocumentMsg::DeleteBackward => delete_backward(model),

        DocumentMsg::DeleteForward => {
            // Step over the byte, then reuse the backward path
            model.editor.move_cursor(&model.document, Direction::Right);
            delete_backward(model);
        }
    }

    Some(Cmd::Redraw)
}

fn delete_backward(model: &mut AppModel) {
    let cursor = model.cursor();
    if let Some((cy, cx)) = model.document.delete_char(cursor.cy, cursor.cx) {
        model.editor.cursor.cy = cy;
        model.editor.cursor.cx = cx;
    }
}
