use cardform::{NumericValue, validate_card_digits};

#[test]
fn sixteen_digit_card_number() {
    let n = NumericValue::parse("1234567890123456");
    assert!(validate_card_digits(n, true, true, 16, "Card number").valid);

    let v = validate_card_digits(n, true, true, 15, "Card number");
    assert!(!v.valid);
    assert_eq!(v.helper_text, "Requires 15 digits");
}

#[test]
fn sentinel_after_typing_is_required() {
    let v = validate_card_digits(NumericValue::EMPTY, true, false, 16, "Card number");
    assert!(!v.valid);
    assert_eq!(v.helper_text, "Card number is required");
}

#[test]
fn unparsable_input_is_the_sentinel() {
    assert_eq!(NumericValue::parse("12-34"), NumericValue::EMPTY);
    assert_eq!(NumericValue::parse("1.5"), NumericValue::EMPTY);
    assert_eq!(NumericValue::parse("abc").as_i64(), -1);
}
