use crate::common::*;
use cardform::prelude::*;

#[test]
fn typing_commits_only_once_valid() {
    let mut form = empty_form();
    form.input(FieldId::CardNumber, "1234").unwrap();
    assert_eq!(form.card_number().value, NumericValue::EMPTY);
    assert_eq!(
        form.validation(FieldId::CardNumber).helper_text,
        "Requires 16 digits"
    );

    form.input(FieldId::CardNumber, sample_card_number()).unwrap();
    assert_eq!(form.card_number().value.as_i64(), 1234567890123456);
    assert!(form.card_number().valid);
}

#[test]
fn keystroke_typing_fills_the_form() {
    let form = filled_form();
    assert!(form.is_valid(), "blocked by {:?}", form.first_invalid());
    assert_eq!(form.cardholder().value, sample_cardholder());
    assert_eq!(form.cvc().value.as_i64(), 123);
    assert_eq!(form.card_type(), Some(CardType::Visa));
}

#[test]
fn editing_a_valid_field_into_an_invalid_one_closes_the_gate() {
    let mut form = filled_form();
    form.input(FieldId::Cvc, "12").unwrap();
    assert!(!form.is_valid());
    assert_eq!(form.first_invalid(), Some(FieldId::Cvc));
    // The last good value stays committed until a new valid one arrives.
    assert_eq!(form.cvc().value.as_i64(), 123);

    form.input(FieldId::Cvc, "456").unwrap();
    assert!(form.is_valid());
    assert_eq!(form.cvc().value.as_i64(), 456);
}

#[test]
fn expiry_errors_follow_date_and_blur_only() {
    let mut form = empty_form();
    form.pick_expiry(Some(last_month()));
    assert_eq!(
        form.validation(FieldId::ExpiryDate).helper_text,
        "Invalid expiry date"
    );

    // Clearing before any blur shows no error.
    form.pick_expiry(None);
    assert!(form.validation(FieldId::ExpiryDate).valid);

    form.blur(FieldId::ExpiryDate);
    assert_eq!(
        form.validation(FieldId::ExpiryDate).helper_text,
        "Expiry date is required"
    );

    form.input(FieldId::ExpiryDate, "12/2030").unwrap();
    assert!(form.validation(FieldId::ExpiryDate).valid);
    assert_eq!(form.display(FieldId::ExpiryDate), "12/2030");
}

#[test]
fn untouched_fields_show_placeholder_helper_text() {
    let form = empty_form();
    for field in FieldId::ALL {
        let v = form.validation(field);
        assert!(v.valid);
        assert!(!v.has_message(), "{field}");
    }
}

#[test]
fn trailing_spaces_cannot_stretch_a_short_name() {
    let mut form = filled_form();
    type_into(&mut form, FieldId::Cardholder, "A    ");
    assert_eq!(form.display(FieldId::Cardholder), "A    ");
    assert_eq!(
        form.validation(FieldId::Cardholder).helper_text,
        "Minimum 5 characters"
    );
    assert_eq!(form.cardholder().value, sample_cardholder());
    assert!(!form.is_valid());
    assert_eq!(
        form.confirm().unwrap_err(),
        Error::Incomplete(FieldId::Cardholder)
    );
}

#[test]
fn overlong_card_number_keeps_its_digits() {
    let mut form = empty_form();
    type_into(&mut form, FieldId::CardNumber, "12345678901234567890");
    assert_eq!(form.display(FieldId::CardNumber), "12345678901234567890");
    assert_eq!(
        form.validation(FieldId::CardNumber).helper_text,
        "Requires 16 digits"
    );
    assert!(!form.is_field_valid(FieldId::CardNumber));
}

#[test]
fn prefilled_values_are_validated() {
    let mut form = PaymentFormBuilder::new()
        .with_clock(Box::new(FixedClock(today())))
        .prefill(PaymentDetails::new(
            CardType::Amex,
            "Jo",
            NumericValue::new(1234567890123456),
            NumericValue::new(123),
            next_month(),
        ))
        .build()
        .unwrap();
    assert!(!form.is_valid());
    assert_eq!(form.first_invalid(), Some(FieldId::Cardholder));

    type_into(&mut form, FieldId::Cardholder, sample_cardholder());
    assert!(form.is_valid(), "blocked by {:?}", form.first_invalid());
}
