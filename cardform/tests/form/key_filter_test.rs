use crate::common::*;
use cardform::prelude::*;

#[test]
fn notation_keys_never_reach_numeric_fields() {
    let mut form = empty_form();
    type_into(&mut form, FieldId::Cvc, "1e-2.+3");
    assert_eq!(form.display(FieldId::Cvc), "123");
    assert_eq!(form.cvc().value.as_i64(), 123);
}

#[test]
fn legacy_key_codes() {
    let form = empty_form();
    for code in [189, 187, 190, 69] {
        assert!(!form.key(FieldId::CardNumber, Key::Code(code)));
    }
    assert!(form.key(FieldId::CardNumber, Key::Code(49)));
}

#[test]
fn text_fields_accept_everything() {
    let form = empty_form();
    assert!(form.key(FieldId::Cardholder, Key::Char('-')));
    assert!(form.key(FieldId::ExpiryDate, Key::Char('/')));
}
