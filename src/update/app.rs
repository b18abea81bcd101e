//! App message handlers (file operations, resize, quit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (file operations, resize, quit)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(rows, cols) => {
            model.resize(rows, cols);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => match model.document.file_path.clone() {
            Some(path) => {
                let content = model.document.serialize();
                Some(Cmd::SaveFile { path, content })
            }
            None => {
                model.ui.set_status("No file name - cannot save");
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveCompleted(result) => {
            match result {
                Ok(written) => {
                    model.document.mark_saved();
                    model.ui.set_status(format!("{} bytes written to disk", written));
                }
                Err(e) => {
                    tracing::warn!("Save failed: {}", e);
                    model.ui.set_status(format!("Can't save! I/O error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            if !model.document.is_dirty() || model.ui.quit_guard.press() {
                return Some(Cmd::Quit);
            }
            let remaining = model.ui.quit_guard.remaining();
            model.ui.set_status(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                remaining
            ));
            Some(Cmd::Redraw)
        }
    }
}
