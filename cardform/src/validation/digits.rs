// cardform-rs/cardform/src/validation/digits.rs

use super::Validation;
use crate::types::NumericValue;

/// Validate a card number or CVC against an exact digit count.
///
/// The empty sentinel is only an error after the field was touched or
/// blurred; before that the field is valid so no error shows on a fresh
/// form. Digits are counted on the parsed value, so leading zeros do not
/// count.
pub fn validate_card_digits(
    value: NumericValue,
    touched: bool,
    blurred: bool,
    limit: usize,
    label: &str,
) -> Validation {
    match value.digit_count() {
        None if touched || blurred => Validation::invalid(format!("{} is required", label)),
        Some(count) if count != limit => {
            Validation::invalid(format!("Requires {} digits", limit))
        }
        _ => Validation::ok(),
    }
}
