// cardform-rs/cardform/src/validation/cardholder.rs

use super::Validation;
use crate::constants::CARDHOLDER_MIN_LEN;

const SPECIAL_CHARACTERS: &str = "Contains numbers or special characters";
const REQUIRED: &str = "Cardholder name is required";

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' '
}

/// Validate a cardholder name.
///
/// Only ASCII letters and spaces are accepted. An empty name is reported as
/// required once the field was touched or blurred; a short name only while
/// it is being edited (`touched`). Those two messages take precedence over
/// the character check.
pub fn validate_cardholder_name(value: &str, touched: bool, blurred: bool) -> Validation {
    let mut result = if value.chars().all(is_name_char) {
        Validation::ok()
    } else {
        Validation::invalid(SPECIAL_CHARACTERS)
    };

    let len = value.chars().count();
    if len == 0 && (touched || blurred) {
        result = Validation::invalid(REQUIRED);
    } else if len < CARDHOLDER_MIN_LEN && touched {
        result = Validation::invalid(format!("Minimum {} characters", CARDHOLDER_MIN_LEN));
    }
    result
}
