// cardform-rs/cardform/src/form/builder.rs

use crate::Result;
use crate::clock::{Clock, SystemClock};
use crate::form::{FormConfig, PaymentDetails, PaymentForm};

/// Helper to construct a PaymentForm with optional configuration.
pub struct PaymentFormBuilder {
    config: FormConfig,
    clock: Option<Box<dyn Clock>>,
    prefill: Option<PaymentDetails>,
}

impl PaymentFormBuilder {
    /// Default limits, system clock, empty fields.
    pub fn new() -> Self {
        Self {
            config: FormConfig::default(),
            clock: None,
            prefill: None,
        }
    }

    /// Replace the whole config.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Required card number length.
    pub fn card_number_digits(mut self, digits: usize) -> Self {
        self.config.card_number_digits = digits;
        self
    }

    /// Required CVC length.
    pub fn cvc_digits(mut self, digits: usize) -> Self {
        self.config.cvc_digits = digits;
        self
    }

    /// Provide the source of "today" (e.g. FixedClock). Defaults to the
    /// local system clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Start from known values instead of an empty form.
    pub fn prefill(mut self, details: PaymentDetails) -> Self {
        self.prefill = Some(details);
        self
    }

    /// Consume the builder and return the form.
    /// Fails with InvalidConfig when a digit limit is out of range.
    pub fn build(self) -> Result<PaymentForm> {
        self.config.validate()?;
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let mut form = PaymentForm::new(self.config, clock);
        if let Some(details) = &self.prefill {
            form.prefill(details);
        }
        Ok(form)
    }
}

impl Default for PaymentFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
