// cardform-rs/cardform/src/validation/selection.rs

use super::Validation;
use crate::types::CardType;

/// Validate the card type select. Unselected is an error only after the
/// select has received focus.
pub fn validate_selection(value: Option<CardType>, focused: bool, label: &str) -> Validation {
    if value.is_none() && focused {
        Validation::invalid(format!("{} is required", label))
    } else {
        Validation::ok()
    }
}
