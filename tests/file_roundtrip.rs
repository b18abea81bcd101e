//! Load, edit, save, reload

mod common;

use std::fs;

use crate_edit::config::EditorConfig;
use crate_edit::file_io;
use crate_edit::input::{Key, SpecialKey};
use crate_edit::model::AppModel;
use crate_edit::runtime::{dispatch, Flow};

const CTRL_S: Key = Key::Char(0x13);
const CTRL_Q: Key = Key::Char(0x11);

fn open(path: &std::path::Path) -> AppModel {
    let doc = file_io::load(path, 8).unwrap();
    AppModel::new(doc, 24, 80, EditorConfig::default())
}

#[test]
fn test_load_strips_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    fs::write(&path, b"one\r\ntwo\n\nlast").unwrap();

    let model = open(&path);
    let rows: Vec<&[u8]> = model.document().rows().map(|r| r.chars()).collect();
    let expected: Vec<&[u8]> = vec![b"one", b"two", b"", b"last"];
    assert_eq!(rows, expected);
    assert!(!model.document().is_dirty());
}

#[test]
fn test_load_empty_file_has_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, b"").unwrap();

    let model = open(&path);
    assert!(model.document().is_empty());
}

#[test]
fn test_edit_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"hello\nworld\n").unwrap();

    let mut model = open(&path);
    dispatch(&mut model, Key::Special(SpecialKey::End));
    dispatch(&mut model, Key::Char(b'!'));
    assert!(model.document().is_dirty());

    assert_eq!(dispatch(&mut model, CTRL_S), Flow::Continue);
    assert!(!model.document().is_dirty());
    assert_eq!(model.ui.status_text(), "13 bytes written to disk");
    assert_eq!(fs::read(&path).unwrap(), b"hello!\nworld\n");

    let reloaded = open(&path);
    assert_eq!(reloaded.document().serialize(), b"hello!\nworld\n");
}

#[test]
fn test_save_adds_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_eol.txt");
    fs::write(&path, b"a\nb").unwrap();

    let mut model = open(&path);
    dispatch(&mut model, CTRL_S);
    assert_eq!(fs::read(&path).unwrap(), b"a\nb\n");
}

#[test]
fn test_save_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.txt");

    let mut model = open(&path);
    for &b in b"new" {
        dispatch(&mut model, Key::Char(b));
    }
    dispatch(&mut model, CTRL_S);

    assert_eq!(fs::read(&path).unwrap(), b"new\n");
}

#[test]
fn test_save_error_keeps_document_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("f.txt");

    let mut model = open(&path);
    dispatch(&mut model, Key::Char(b'x'));
    dispatch(&mut model, CTRL_S);

    assert!(model.document().is_dirty());
    assert!(model
        .ui
        .status_text()
        .starts_with("Can't save! I/O error: "));
}

#[test]
fn test_quit_after_save_is_immediate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.txt");

    let mut model = open(&path);
    dispatch(&mut model, Key::Char(b'x'));
    dispatch(&mut model, CTRL_S);

    assert_eq!(dispatch(&mut model, CTRL_Q), Flow::Quit);
}
