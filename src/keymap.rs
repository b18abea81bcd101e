//! Default keybindings for the editor
//!
//! Maps decoded keys to messages. The editor is modeless, so the mapping
//! does not depend on any state.

use crate::input::{ctrl_key, Key, SpecialKey};
use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};

const QUIT: u8 = ctrl_key(b'q');
const SAVE: u8 = ctrl_key(b's');
const REFRESH: u8 = ctrl_key(b'l');

/// Translate a key press into the message it triggers
pub fn msg_for_key(key: Key) -> Msg {
    match key {
        Key::Special(special) => match special {
            SpecialKey::Up => Msg::move_cursor(Direction::Up),
            SpecialKey::Down => Msg::move_cursor(Direction::Down),
            SpecialKey::Left => Msg::move_cursor(Direction::Left),
            SpecialKey::Right => Msg::move_cursor(Direction::Right),
            SpecialKey::Home => Msg::Editor(EditorMsg::MoveCursorLineStart),
            SpecialKey::End => Msg::Editor(EditorMsg::MoveCursorLineEnd),
            SpecialKey::PageUp => Msg::Editor(EditorMsg::PageUp),
            SpecialKey::PageDown => Msg::Editor(EditorMsg::PageDown),
            SpecialKey::Backspace => Msg::Document(DocumentMsg::DeleteBackward),
            SpecialKey::Del => Msg::Document(DocumentMsg::DeleteForward),
            SpecialKey::Escape => Msg::Noop,
        },
        Key::Char(QUIT) => Msg::App(AppMsg::Quit),
        Key::Char(SAVE) => Msg::App(AppMsg::SaveFile),
        // Ctrl-L traditionally refreshes; every frame is a full redraw anyway
        Key::Char(REFRESH) | Key::Char(b'\r') => Msg::Noop,
        Key::Char(byte) => Msg::insert_char(byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(
            msg_for_key(Key::Special(SpecialKey::Left)),
            Msg::move_cursor(Direction::Left)
        );
        assert_eq!(
            msg_for_key(Key::Special(SpecialKey::Down)),
            Msg::move_cursor(Direction::Down)
        );
    }

    #[test]
    fn test_ctrl_chords() {
        assert_eq!(msg_for_key(Key::Char(0x11)), Msg::App(AppMsg::Quit));
        assert_eq!(msg_for_key(Key::Char(0x13)), Msg::App(AppMsg::SaveFile));
        assert_eq!(msg_for_key(Key::Char(0x0c)), Msg::Noop);
    }

    #[test]
    fn test_enter_and_escape_are_ignored() {
        assert_eq!(msg_for_key(Key::Char(b'\r')), Msg::Noop);
        assert_eq!(msg_for_key(Key::Special(SpecialKey::Escape)), Msg::Noop);
    }

    #[test]
    fn test_printable_and_tab_insert() {
        assert_eq!(msg_for_key(Key::Char(b'x')), Msg::insert_char(b'x'));
        assert_eq!(msg_for_key(Key::Char(b'\t')), Msg::insert_char(b'\t'));
    }

    #[test]
    fn test_delete_keys() {
        assert_eq!(
            msg_for_key(Key::Special(SpecialKey::Backspace)),
            Msg::Document(DocumentMsg::DeleteBackward)
        );
        assert_eq!(
            msg_for_key(Key::Special(SpecialKey::Del)),
            Msg::Document(DocumentMsg::DeleteForward)
        );
    }
}
