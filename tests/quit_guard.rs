//! Quit confirmation tests

mod common;

use common::test_model;
use crate_edit::commands::Cmd;
use crate_edit::messages::{AppMsg, Direction, Msg};
use crate_edit::update::update;

fn quit(model: &mut crate_edit::AppModel) -> Option<Cmd> {
    update(model, Msg::App(AppMsg::Quit))
}

#[test]
fn test_clean_document_quits_immediately() {
    let mut model = test_model(&["abc"], 0, 0);
    assert_eq!(quit(&mut model), Some(Cmd::Quit));
}

#[test]
fn test_dirty_document_needs_three_presses() {
    let mut model = test_model(&["abc"], 0, 0);
    update(&mut model, Msg::insert_char(b'x'));

    assert_eq!(quit(&mut model), Some(Cmd::Redraw));
    assert_eq!(
        model.ui.status_text(),
        "WARNING!!! File has unsaved changes. Press Ctrl-Q 2 more times to quit."
    );

    assert_eq!(quit(&mut model), Some(Cmd::Redraw));
    assert_eq!(
        model.ui.status_text(),
        "WARNING!!! File has unsaved changes. Press Ctrl-Q 1 more times to quit."
    );

    assert_eq!(quit(&mut model), Some(Cmd::Quit));
}

#[test]
fn test_other_key_resets_the_count() {
    let mut model = test_model(&["abc"], 0, 0);
    update(&mut model, Msg::insert_char(b'x'));

    quit(&mut model);
    quit(&mut model);
    update(&mut model, Msg::move_cursor(Direction::Left));

    assert_eq!(quit(&mut model), Some(Cmd::Redraw));
    assert_eq!(quit(&mut model), Some(Cmd::Redraw));
    assert_eq!(quit(&mut model), Some(Cmd::Quit));
}

#[test]
fn test_ignored_key_also_resets_the_count() {
    let mut model = test_model(&["abc"], 0, 0);
    update(&mut model, Msg::insert_char(b'x'));

    quit(&mut model);
    quit(&mut model);
    update(&mut model, Msg::Noop);

    assert_eq!(model.ui.quit_guard.remaining(), 3);
}

#[test]
fn test_configured_quit_times() {
    let mut model = test_model(&["abc"], 0, 0);
    model.ui.quit_guard = crate_edit::model::QuitGuard::new(1);
    update(&mut model, Msg::insert_char(b'x'));

    assert_eq!(quit(&mut model), Some(Cmd::Quit));
}

#[test]
fn test_resize_does_not_reset_the_count() {
    let mut model = test_model(&["abc"], 0, 0);
    update(&mut model, Msg::insert_char(b'x'));

    quit(&mut model);
    quit(&mut model);
    update(&mut model, Msg::App(AppMsg::Resize(30, 100)));

    assert_eq!(quit(&mut model), Some(Cmd::Quit));
}
