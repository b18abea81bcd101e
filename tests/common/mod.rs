//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use crate_edit::config::EditorConfig;
use crate_edit::model::{AppModel, Cursor, Document};

/// Terminal size used by test models (a 10×20 text area)
pub const TEST_ROWS: usize = 12;
pub const TEST_COLS: usize = 20;

/// Create a test model from lines with the cursor at `(cx, cy)`
pub fn test_model(lines: &[&str], cx: usize, cy: usize) -> AppModel {
    test_model_with_size(lines, cx, cy, TEST_ROWS, TEST_COLS)
}

/// Create a test model for an explicit terminal size
pub fn test_model_with_size(
    lines: &[&str],
    cx: usize,
    cy: usize,
    rows: usize,
    cols: usize,
) -> AppModel {
    let document = Document::from_lines(lines);
    let mut model = AppModel::new(document, rows, cols, EditorConfig::default());
    model.editor.cursor = Cursor::at(cx, cy);
    model
}

/// Create a model over `count` lines named "line 0", "line 1", ...
pub fn numbered_model(count: usize, cx: usize, cy: usize) -> AppModel {
    let lines: Vec<String> = (0..count).map(|i| format!("line {}", i)).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    test_model(&refs, cx, cy)
}

/// Row contents as strings
pub fn doc_rows(model: &AppModel) -> Vec<String> {
    model
        .document()
        .rows()
        .map(|r| String::from_utf8_lossy(r.chars()).into_owned())
        .collect()
}

/// Cursor as `(cx, cy)`
pub fn cursor_pos(model: &AppModel) -> (usize, usize) {
    let c = model.cursor();
    (c.cx, c.cy)
}
