//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the pinned clock and a known-good set of field
//! values so tests across the crate and the tests/ directory agree on them.
#![allow(dead_code)]

use chrono::NaiveDate;

use crate::clock::FixedClock;
use crate::form::{PaymentDetails, PaymentForm};
use crate::types::{CardType, FieldId, NumericValue};

/// Day every test form treats as "today": 2026-10-19.
#[doc(hidden)]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or(NaiveDate::MIN)
}

/// Empty form with default limits and the clock pinned to `test_today()`.
#[doc(hidden)]
pub fn test_form() -> PaymentForm {
    PaymentForm::new(Default::default(), Box::new(FixedClock(test_today())))
}

/// Details matching what `fill_valid` enters.
#[doc(hidden)]
pub fn sample_details() -> PaymentDetails {
    PaymentDetails::new(
        CardType::Visa,
        "Jane Smith",
        NumericValue::new(4111111111111111),
        NumericValue::new(123),
        NaiveDate::from_ymd_opt(2026, 11, 1).unwrap_or(NaiveDate::MIN),
    )
}

/// Drive every field through its events with valid values.
#[doc(hidden)]
pub fn fill_valid(form: &mut PaymentForm) {
    let details = sample_details();
    form.focus(FieldId::CardType);
    form.select_card_type(details.card_type());
    let _ = form.input(FieldId::Cardholder, details.cardholder());
    form.blur(FieldId::Cardholder);
    let _ = form.input(FieldId::CardNumber, &details.card_number().display());
    form.blur(FieldId::CardNumber);
    let _ = form.input(FieldId::Cvc, &details.cvc().display());
    form.blur(FieldId::Cvc);
    form.pick_expiry(Some(details.expiry()));
    form.blur(FieldId::ExpiryDate);
}
