// cardform-rs/cardform/src/validation/mod.rs

//! Field validators.
//!
//! Every validator is total: it maps the field's current value and its
//! interaction flags to a [`Validation`] and never fails. Nothing here keeps
//! state between calls, so the displayed error is always a function of the
//! inputs alone.

/// Cardholder name rules.
pub mod cardholder;
/// Card number and CVC rules.
pub mod digits;
/// Expiry date rules.
pub mod expiry;
/// Card type rules.
pub mod selection;

pub use cardholder::validate_cardholder_name;
pub use digits::validate_card_digits;
pub use expiry::validate_expiry;
pub use selection::validate_selection;

use crate::constants::EMPTY_HELPER_TEXT;

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the value passes.
    pub valid: bool,
    /// Message under the input; [`crate::constants::EMPTY_HELPER_TEXT`] when valid.
    pub helper_text: String,
}

impl Validation {
    /// Valid result with the placeholder helper text.
    pub fn ok() -> Self {
        Self {
            valid: true,
            helper_text: EMPTY_HELPER_TEXT.to_string(),
        }
    }

    /// Failed result carrying `helper_text`.
    pub fn invalid(helper_text: impl Into<String>) -> Self {
        Self {
            valid: false,
            helper_text: helper_text.into(),
        }
    }

    /// Whether the helper line carries an actual message.
    pub fn has_message(&self) -> bool {
        !self.helper_text.trim().is_empty()
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::ok()
    }
}
