// cardform-rs/cardform/src/input.rs
//! Keystroke filtering for numeric fields.
//!
//! A numeric input would accept `-`, `+`, `.` and `e` (scientific
//! notation), none of which can appear in card digits. These keys are
//! dropped before they reach the field, so they never show up as a
//! validation error.

use crate::constants::{KEY_CODE_E, KEY_CODE_EQUALS_PLUS, KEY_CODE_MINUS, KEY_CODE_PERIOD};

/// A key press as delivered by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The character the key produces
    Char(char),
    /// Legacy DOM `keyCode`
    Code(u32),
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

/// Whether a numeric field lets this key through.
pub fn accepts_numeric_key(key: Key) -> bool {
    match key {
        Key::Char(c) => !matches!(c, '-' | '+' | '=' | '.' | 'e' | 'E'),
        Key::Code(code) => !matches!(
            code,
            KEY_CODE_MINUS | KEY_CODE_EQUALS_PLUS | KEY_CODE_PERIOD | KEY_CODE_E
        ),
    }
}
