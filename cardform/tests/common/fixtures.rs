// fixtures.rs — provides commonly used dates, values and forms

use cardform::prelude::*;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn next_month() -> NaiveDate {
    month_offset(today(), 1)
}

pub fn last_month() -> NaiveDate {
    month_offset(today(), -1)
}

pub fn sample_card_number() -> &'static str {
    "1234567890123456"
}

pub fn sample_cvc() -> &'static str {
    "123"
}

pub fn sample_cardholder() -> &'static str {
    "John Smith"
}

pub fn empty_form() -> PaymentForm {
    PaymentFormBuilder::new()
        .with_clock(Box::new(FixedClock(today())))
        .build()
        .unwrap()
}

/// Type every value in, blurring each field after it, the way a user would.
pub fn filled_form() -> PaymentForm {
    let mut form = empty_form();
    form.focus(FieldId::CardType);
    form.input(FieldId::CardType, "visa").unwrap();
    type_into(&mut form, FieldId::Cardholder, sample_cardholder());
    type_into(&mut form, FieldId::CardNumber, sample_card_number());
    type_into(&mut form, FieldId::Cvc, sample_cvc());
    form.pick_expiry(Some(next_month()));
    form.blur(FieldId::ExpiryDate);
    form
}

/// Feed `text` one keystroke at a time through the key gate, then blur.
pub fn type_into(form: &mut PaymentForm, field: FieldId, text: &str) {
    form.focus(field);
    let mut typed = String::new();
    for c in text.chars() {
        if form.key(field, Key::Char(c)) {
            typed.push(c);
            form.input(field, &typed).unwrap();
        }
    }
    form.blur(field);
}
