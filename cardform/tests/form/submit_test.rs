use crate::common::*;
use cardform::prelude::*;

#[test]
fn submit_emits_five_committed_values() {
    let form = filled_form();
    let mut sink = RecordingSink::new();
    form.submit(&mut sink).unwrap();

    let details = sink.last().unwrap();
    assert_eq!(details.card_type(), CardType::Visa);
    assert_eq!(details.cardholder(), "John Smith");
    assert_eq!(details.card_number().as_i64(), 1234567890123456);
    assert_eq!(details.cvc().as_i64(), 123);
    assert_eq!(details.expiry_display(), "11/2026");
}

#[test]
fn submit_through_closure_sink() {
    let form = filled_form();
    let mut lines = Vec::new();
    form.submit(&mut |d: &PaymentDetails| {
        lines.extend(d.lines());
        Ok::<(), Error>(())
    })
    .unwrap();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Card type: visa");
}

#[test]
fn submit_through_log_sink() {
    let _ = env_logger::builder().is_test(true).try_init();
    let form = filled_form();
    assert!(form.submit(&mut LogSink::new()).is_ok());
}

#[test]
fn incomplete_form_reports_first_blocking_field() {
    let mut form = empty_form();
    form.select_card_type(CardType::Amex);
    let mut sink = RecordingSink::new();
    let err = form.submit(&mut sink).unwrap_err();
    assert_eq!(err, Error::Incomplete(FieldId::Cardholder));
    assert!(sink.submitted.is_empty());
}

#[test]
fn sink_failure_is_propagated() {
    let form = filled_form();
    let mut sink = RecordingSink::new();
    sink.set_failures(1);
    assert!(matches!(form.submit(&mut sink), Err(Error::Sink(_))));
    assert!(form.submit(&mut sink).is_ok());
}

#[test]
fn reset_then_resubmit_is_blocked() {
    let mut form = filled_form();
    form.reset();
    assert_eq!(form.confirm().unwrap_err(), Error::Incomplete(FieldId::CardType));
}
