//! View - composes one terminal frame from the model
//!
//! The whole screen is built into a single byte buffer and written with one
//! call, so the terminal never shows a half-drawn frame.

use std::time::Instant;

use crate::model::{status_bar, AppModel};

/// Welcome banner shown on an empty document
pub fn welcome_message() -> String {
    format!("Crate editor -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Append-only output buffer with the escape sequences the editor uses
#[derive(Debug, Default)]
pub struct Frame {
    buf: Vec<u8>,
}

impl Frame {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn hide_cursor(&mut self) {
        self.push(b"\x1b[?25l");
    }

    pub fn show_cursor(&mut self) {
        self.push(b"\x1b[?25h");
    }

    pub fn cursor_home(&mut self) {
        self.push(b"\x1b[H");
    }

    /// Move the cursor to a 1-based terminal position
    pub fn cursor_to(&mut self, row: usize, col: usize) {
        self.push(format!("\x1b[{};{}H", row, col).as_bytes());
    }

    pub fn clear_line(&mut self) {
        self.push(b"\x1b[K");
    }

    pub fn inverted(&mut self) {
        self.push(b"\x1b[7m");
    }

    pub fn reset_style(&mut self) {
        self.push(b"\x1b[m");
    }

    pub fn newline(&mut self) {
        self.push(b"\r\n");
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Build the full frame for the current model
///
/// The caller is expected to have run `AppModel::scroll` first so that the
/// viewport contains the cursor and `rx` is current.
pub fn render_frame(model: &AppModel, now: Instant) -> Vec<u8> {
    let vp = &model.editor.viewport;
    let mut frame = Frame::with_capacity((vp.screenrows + 2) * (vp.screencols + 8));

    frame.hide_cursor();
    frame.cursor_home();

    draw_rows(&mut frame, model);
    draw_status_bar(&mut frame, model);
    draw_message_bar(&mut frame, model, now);

    let cursor = model.cursor();
    frame.cursor_to(
        cursor.cy.saturating_sub(vp.rowoff) + 1,
        model.editor.rx.saturating_sub(vp.coloff) + 1,
    );
    frame.show_cursor();

    frame.into_bytes()
}

fn draw_rows(frame: &mut Frame, model: &AppModel) {
    let vp = &model.editor.viewport;
    let doc = &model.document;

    for y in 0..vp.screenrows {
        let filerow = y + vp.rowoff;
        match doc.row(filerow) {
            Some(row) => {
                let render = row.render();
                let start = vp.coloff.min(render.len());
                let end = (vp.coloff + vp.screencols).min(render.len());
                frame.push(&render[start..end]);
            }
            None if doc.is_empty() && y == vp.screenrows / 3 => {
                draw_welcome(frame, vp.screencols);
            }
            None => frame.push(b"~"),
        }

        frame.clear_line();
        frame.newline();
    }
}

fn draw_welcome(frame: &mut Frame, screencols: usize) {
    let welcome = welcome_message();
    let welcome = &welcome.as_bytes()[..welcome.len().min(screencols)];

    let mut padding = (screencols - welcome.len()) / 2;
    if padding > 0 {
        frame.push(b"~");
        padding -= 1;
    }
    frame.push(" ".repeat(padding).as_bytes());
    frame.push(welcome);
}

fn draw_status_bar(frame: &mut Frame, model: &AppModel) {
    let line = status_bar::layout(
        &model.document,
        &model.editor.cursor,
        model.editor.viewport.screencols,
    );
    frame.inverted();
    frame.push(line.as_bytes());
    frame.reset_style();
    frame.newline();
}

fn draw_message_bar(frame: &mut Frame, model: &AppModel, now: Instant) {
    frame.clear_line();
    let Some(msg) = &model.ui.status else {
        return;
    };
    if msg.is_visible(now, model.status_timeout()) {
        let text: String = msg
            .text
            .chars()
            .take(model.editor.viewport.screencols)
            .collect();
        frame.push(text.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_to_is_one_based_sequence() {
        let mut frame = Frame::default();
        frame.cursor_to(3, 7);
        assert_eq!(frame.into_bytes(), b"\x1b[3;7H");
    }

    #[test]
    fn test_welcome_is_centered_with_marker() {
        let mut frame = Frame::default();
        let width = welcome_message().len() + 10;
        draw_welcome(&mut frame, width);
        let out = String::from_utf8(frame.into_bytes()).unwrap();
        assert!(out.starts_with("~    "));
        assert_eq!(out.len(), 5 + welcome_message().len());
    }

    #[test]
    fn test_welcome_truncated_to_width() {
        let mut frame = Frame::default();
        draw_welcome(&mut frame, 6);
        assert_eq!(frame.into_bytes(), b"Crate ");
    }
}
