// cardform-rs/cardform/src/sink/mock.rs

use super::traits::SubmitSink;
use crate::form::PaymentDetails;
use crate::{Error, Result};

/// Recording sink for tests. It keeps every accepted submission.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Accepted submissions, oldest first.
    pub submitted: Vec<PaymentDetails>,
    /// Testing hook: number of subsequent submissions that should fail
    pub failures: usize,
}

impl RecordingSink {
    /// Empty recorder that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent submissions should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Most recent accepted submission.
    pub fn last(&self) -> Option<&PaymentDetails> {
        self.submitted.last()
    }
}

impl SubmitSink for RecordingSink {
    fn submit(&mut self, details: &PaymentDetails) -> Result<()> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Sink("recording sink failure".to_string()));
        }
        self.submitted.push(details.clone());
        Ok(())
    }
}
