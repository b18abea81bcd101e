//! Key decoding - turns raw terminal bytes into logical keys
//!
//! Escape sequences are decoded by a small fixed automaton. A sequence that
//! stops arriving mid-way (the read times out) decodes to a lone Escape, so the
//! editor never blocks waiting for bytes the terminal will not send.

use anyhow::Result;

use crate::terminal::ByteSource;

const ESC: u8 = 0x1b;
const BACKSPACE: u8 = 127;

/// Map a letter to its Ctrl-chord byte (`ctrl_key(b'q') == 0x11`)
#[inline]
pub const fn ctrl_key(k: u8) -> u8 {
    k & 0x1f
}

/// Keys that are not a plain byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Left,
    Right,
    Up,
    Down,
    Del,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Escape,
}

/// One logical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A literal byte, including control bytes such as Ctrl-Q
    Char(u8),
    /// A decoded special key
    Special(SpecialKey),
}

impl Key {
    /// Check whether this is the Ctrl chord of letter `k`
    pub fn is_ctrl(self, k: u8) -> bool {
        self == Key::Char(ctrl_key(k))
    }
}

/// Block until a key arrives and decode it
pub fn read_key(src: &mut impl ByteSource) -> Result<Key> {
    loop {
        if let Some(key) = try_read_key(src)? {
            return Ok(key);
        }
    }
}

/// Decode one key, or `None` if no byte arrived within one read timeout
pub fn try_read_key(src: &mut impl ByteSource) -> Result<Option<Key>> {
    let Some(first) = src.read_byte()? else {
        return Ok(None);
    };

    let key = match first {
        ESC => decode_escape(src)?,
        BACKSPACE => Key::Special(SpecialKey::Backspace),
        b if b == ctrl_key(b'h') => Key::Special(SpecialKey::Backspace),
        b => Key::Char(b),
    };
    tracing::trace!(?key, "decoded key");
    Ok(Some(key))
}

/// Decode the bytes following an ESC
fn decode_escape(src: &mut impl ByteSource) -> Result<Key> {
    const ESCAPE: Key = Key::Special(SpecialKey::Escape);

    let Some(b1) = src.read_byte()? else {
        return Ok(ESCAPE);
    };
    let Some(b2) = src.read_byte()? else {
        return Ok(ESCAPE);
    };

    let special = match (b1, b2) {
        (b'[', digit @ b'0'..=b'9') => {
            let Some(b3) = src.read_byte()? else {
                return Ok(ESCAPE);
            };
            if b3 != b'~' {
                return Ok(ESCAPE);
            }
            match digit {
                b'1' | b'7' => SpecialKey::Home,
                b'3' => SpecialKey::Del,
                b'4' | b'8' => SpecialKey::End,
                b'5' => SpecialKey::PageUp,
                b'6' => SpecialKey::PageDown,
                _ => return Ok(ESCAPE),
            }
        }
        (b'[', b'A') => SpecialKey::Up,
        (b'[', b'B') => SpecialKey::Down,
        (b'[', b'C') => SpecialKey::Right,
        (b'[', b'D') => SpecialKey::Left,
        (b'[', b'H') | (b'O', b'H') => SpecialKey::Home,
        (b'[', b'F') | (b'O', b'F') => SpecialKey::End,
        _ => return Ok(ESCAPE),
    };
    Ok(Key::Special(special))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedInput;

    fn decode(bytes: &[u8]) -> Key {
        let mut src = ScriptedInput::new(bytes);
        read_key(&mut src).unwrap()
    }

    #[test]
    fn test_plain_byte() {
        assert_eq!(decode(b"a"), Key::Char(b'a'));
    }

    #[test]
    fn test_ctrl_chord_is_char() {
        assert_eq!(decode(&[0x11]), Key::Char(ctrl_key(b'q')));
        assert!(decode(&[0x11]).is_ctrl(b'q'));
    }

    #[test]
    fn test_backspace_bytes() {
        assert_eq!(decode(&[127]), Key::Special(SpecialKey::Backspace));
        assert_eq!(decode(&[8]), Key::Special(SpecialKey::Backspace));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(decode(b"\x1b[A"), Key::Special(SpecialKey::Up));
        assert_eq!(decode(b"\x1b[B"), Key::Special(SpecialKey::Down));
        assert_eq!(decode(b"\x1b[C"), Key::Special(SpecialKey::Right));
        assert_eq!(decode(b"\x1b[D"), Key::Special(SpecialKey::Left));
    }

    #[test]
    fn test_tilde_sequences() {
        assert_eq!(decode(b"\x1b[1~"), Key::Special(SpecialKey::Home));
        assert_eq!(decode(b"\x1b[3~"), Key::Special(SpecialKey::Del));
        assert_eq!(decode(b"\x1b[4~"), Key::Special(SpecialKey::End));
        assert_eq!(decode(b"\x1b[5~"), Key::Special(SpecialKey::PageUp));
        assert_eq!(decode(b"\x1b[6~"), Key::Special(SpecialKey::PageDown));
        assert_eq!(decode(b"\x1b[7~"), Key::Special(SpecialKey::Home));
        assert_eq!(decode(b"\x1b[8~"), Key::Special(SpecialKey::End));
    }

    #[test]
    fn test_unmapped_digit_is_escape() {
        assert_eq!(decode(b"\x1b[2~"), Key::Special(SpecialKey::Escape));
    }

    #[test]
    fn test_digit_without_tilde_is_escape() {
        assert_eq!(decode(b"\x1b[3x"), Key::Special(SpecialKey::Escape));
    }

    #[test]
    fn test_home_end_variants() {
        assert_eq!(decode(b"\x1b[H"), Key::Special(SpecialKey::Home));
        assert_eq!(decode(b"\x1b[F"), Key::Special(SpecialKey::End));
        assert_eq!(decode(b"\x1bOH"), Key::Special(SpecialKey::Home));
        assert_eq!(decode(b"\x1bOF"), Key::Special(SpecialKey::End));
    }

    #[test]
    fn test_lone_escape_on_timeout() {
        assert_eq!(decode(b"\x1b"), Key::Special(SpecialKey::Escape));
        assert_eq!(decode(b"\x1b["), Key::Special(SpecialKey::Escape));
        assert_eq!(decode(b"\x1b[5"), Key::Special(SpecialKey::Escape));
    }

    #[test]
    fn test_unknown_sequence_is_escape() {
        assert_eq!(decode(b"\x1b[Z"), Key::Special(SpecialKey::Escape));
        assert_eq!(decode(b"\x1bOA"), Key::Special(SpecialKey::Escape));
        assert_eq!(decode(b"\x1bxy"), Key::Special(SpecialKey::Escape));
    }

    #[test]
    fn test_consumes_only_its_sequence() {
        let mut src = ScriptedInput::new(b"\x1b[Ax\x1b[3~");
        assert_eq!(read_key(&mut src).unwrap(), Key::Special(SpecialKey::Up));
        assert_eq!(read_key(&mut src).unwrap(), Key::Char(b'x'));
        assert_eq!(read_key(&mut src).unwrap(), Key::Special(SpecialKey::Del));
        assert_eq!(try_read_key(&mut src).unwrap(), None);
    }

    #[test]
    fn test_timeout_inside_sequence_does_not_eat_next_key() {
        let mut src = ScriptedInput::from_chunks(&[b"\x1b", b"a"]);
        assert_eq!(read_key(&mut src).unwrap(), Key::Special(SpecialKey::Escape));
        assert_eq!(read_key(&mut src).unwrap(), Key::Char(b'a'));
    }

    #[test]
    fn test_try_read_key_empty() {
        let mut src = ScriptedInput::new(b"");
        assert_eq!(try_read_key(&mut src).unwrap(), None);
    }
}
