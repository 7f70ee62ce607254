// cardform-rs/cardform/src/sink/traits.rs

use crate::Result;
use crate::form::PaymentDetails;

/// SubmitSink trait abstracts where confirmed payment details go.
///
/// The form only hands over a fully validated [`PaymentDetails`]; the sink
/// decides what submission means.
pub trait SubmitSink {
    /// Receive confirmed details. An error leaves the form untouched.
    fn submit(&mut self, details: &PaymentDetails) -> Result<()>;
}

impl<F> SubmitSink for F
where
    F: FnMut(&PaymentDetails) -> Result<()>,
{
    fn submit(&mut self, details: &PaymentDetails) -> Result<()> {
        self(details)
    }
}
