// cardform-rs/cardform/src/form/config.rs

use crate::constants::{CARD_NUMBER_DIGITS, CVC_DIGITS};
use crate::{Error, Result};

/// Largest digit count a numeric field can hold without overflowing the
/// `i64` behind [`crate::NumericValue`].
pub const MAX_DIGITS: usize = 18;

/// Digit limits of the numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// Required card number length.
    pub card_number_digits: usize,
    /// Required CVC length.
    pub cvc_digits: usize,
}

impl FormConfig {
    /// Both limits within `1..=MAX_DIGITS`.
    pub fn validate(&self) -> Result<()> {
        for (name, digits) in [
            ("card_number_digits", self.card_number_digits),
            ("cvc_digits", self.cvc_digits),
        ] {
            if digits == 0 || digits > MAX_DIGITS {
                return Err(Error::InvalidConfig(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_DIGITS, digits
                )));
            }
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            card_number_digits: CARD_NUMBER_DIGITS,
            cvc_digits: CVC_DIGITS,
        }
    }
}
