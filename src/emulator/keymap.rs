//! Keyboard translation for the CP/M host
//!
//! winit's logical keys already carry the Shift mapping, so translation
//! is mostly a matter of picking out single ASCII characters. Ctrl
//! combinations become the control bytes 0x01-0x1A that CP/M software
//! lives on (^C, ^S, ^P, ...).

use winit::keyboard::{Key, NamedKey};

/// Translate a winit logical key to the ASCII byte the machine sees
///
/// Returns None for keys with no ASCII meaning (function keys,
/// modifiers, non-ASCII characters).
pub fn key_to_ascii(key: &Key, ctrl: bool) -> Option<u8> {
    match key {
        Key::Named(NamedKey::Enter) => Some(0x0D),
        Key::Named(NamedKey::Backspace) => Some(0x08),
        Key::Named(NamedKey::Tab) => Some(0x09),
        Key::Named(NamedKey::Escape) => Some(0x1B),
        Key::Named(NamedKey::Space) => Some(b' '),
        Key::Named(NamedKey::Delete) => Some(0x7F),
        Key::Character(text) => {
            let bytes = text.as_bytes();
            if bytes.len() != 1 || !bytes[0].is_ascii() {
                return None;
            }
            let ch = bytes[0];
            if ctrl && ch.is_ascii_alphabetic() {
                Some(ch.to_ascii_uppercase() - b'A' + 1)
            } else {
                Some(ch)
            }
        }
        _ => None,
    }
}
