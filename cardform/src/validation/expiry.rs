// cardform-rs/cardform/src/validation/expiry.rs

use chrono::NaiveDate;

use super::Validation;

const INVALID: &str = "Invalid expiry date";
const REQUIRED: &str = "Expiry date is required";

/// Validate the expiry date against `today`.
///
/// A date that is not strictly after `today` is invalid. A missing date is
/// only reported once the field has been blurred.
pub fn validate_expiry(date: Option<NaiveDate>, today: NaiveDate, blurred: bool) -> Validation {
    match date {
        Some(d) if d <= today => Validation::invalid(INVALID),
        None if blurred => Validation::invalid(REQUIRED),
        _ => Validation::ok(),
    }
}
