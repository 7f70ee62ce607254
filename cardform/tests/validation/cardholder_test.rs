use cardform::validate_cardholder_name;
use proptest::prelude::*;

#[test]
fn empty_name_before_interaction_is_valid() {
    let v = validate_cardholder_name("", false, false);
    assert!(v.valid);
    assert_eq!(v.helper_text, " ");
}

#[test]
fn empty_name_after_blur_is_required() {
    let v = validate_cardholder_name("", false, true);
    assert!(!v.valid);
    assert_eq!(v.helper_text, "Cardholder name is required");
}

#[test]
fn short_name_while_typing() {
    let v = validate_cardholder_name("Ann", true, false);
    assert_eq!(v.helper_text, "Minimum 5 characters");
}

proptest! {
    #[test]
    fn symbols_rejected_regardless_of_flags(
        name in "[A-Za-z]{3}[0-9#?/]{1,3}[A-Za-z ]{1,8}",
        touched in any::<bool>(),
        blurred in any::<bool>(),
    ) {
        let v = validate_cardholder_name(&name, touched, blurred);
        prop_assert!(!v.valid);
        prop_assert_eq!(v.helper_text.as_str(), "Contains numbers or special characters");
    }
}
