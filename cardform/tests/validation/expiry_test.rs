use crate::common::*;
use cardform::validate_expiry;

#[test]
fn next_month_is_valid() {
    assert!(validate_expiry(Some(next_month()), today(), false).valid);
}

#[test]
fn last_month_is_invalid() {
    let v = validate_expiry(Some(last_month()), today(), true);
    assert!(!v.valid);
    assert_eq!(v.helper_text, "Invalid expiry date");
}

#[test]
fn no_date_after_blur_is_required() {
    let v = validate_expiry(None, today(), true);
    assert!(!v.valid);
    assert_eq!(v.helper_text, "Expiry date is required");
}

#[test]
fn next_month_is_valid_on_the_system_clock() {
    use cardform::{Clock, SystemClock};
    let today = SystemClock.today();
    let next = cardform::month_offset(today, 1);
    assert!(validate_expiry(Some(next), today, false).valid);
}
