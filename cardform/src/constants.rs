// cardform-rs/cardform/src/constants.rs
//! Common limits and display constants used across the crate

/// Digits required for a card number
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Digits required for a CVC
pub const CVC_DIGITS: usize = 3;

/// Shortest accepted cardholder name, in characters
pub const CARDHOLDER_MIN_LEN: usize = 5;

/// Helper text of a valid field. A single space keeps the helper line's
/// height reserved so the layout does not jump when an error appears.
pub const EMPTY_HELPER_TEXT: &str = " ";

/// Raw value of an empty numeric field
pub const NUMERIC_SENTINEL: i64 = -1;

/// Keyboard entry format of the expiry date (`MM/YYYY`)
pub const EXPIRY_FORMAT: &str = "%m/%Y";

/// Legacy DOM key codes rejected by numeric fields: `-`, `=`/`+`, `.`, `e`
pub const KEY_CODE_MINUS: u32 = 189;
/// `=` / `+`
pub const KEY_CODE_EQUALS_PLUS: u32 = 187;
/// `.`
pub const KEY_CODE_PERIOD: u32 = 190;
/// `e` / `E`
pub const KEY_CODE_E: u32 = 69;
