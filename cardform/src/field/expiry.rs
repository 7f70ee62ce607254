// cardform-rs/cardform/src/field/expiry.rs

use chrono::NaiveDate;
use log::{debug, trace};

use crate::Result;
use crate::types::{format_expiry, parse_expiry};
use crate::validation::{Validation, validate_expiry};

/// Expiry date input.
///
/// `blurred` records interaction only: it is set by [`ExpiryField::blur`]
/// and cleared by [`ExpiryField::reset`], never by a validation outcome.
/// Whether an error is displayed is recomputed from the date, the current
/// day and that flag.
#[derive(Debug, Clone)]
pub struct ExpiryField {
    label: String,
    date: Option<NaiveDate>,
    blurred: bool,
}

impl ExpiryField {
    /// No date, never blurred.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            date: None,
            blurred: false,
        }
    }

    /// Field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Picked date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Focus has left the field at least once.
    pub fn blurred(&self) -> bool {
        self.blurred
    }

    /// Input text in `MM/YYYY`, blank when no date is chosen.
    pub fn display(&self) -> String {
        self.date.map(format_expiry).unwrap_or_default()
    }

    /// Validation against `today`.
    pub fn validation(&self, today: NaiveDate) -> Validation {
        validate_expiry(self.date, today, self.blurred)
    }

    /// A date was picked, or the picker was cleared (`None`).
    pub fn pick(&mut self, date: Option<NaiveDate>) {
        debug!("{}: picked {:?}", self.label, date);
        self.date = date;
    }

    /// Keyboard entry. Blank text clears the date; text that is not
    /// `MM/YYYY` is rejected and the previous date is kept.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        trace!("{}: input {:?}", self.label, text);
        if text.trim().is_empty() {
            self.pick(None);
            return Ok(());
        }
        let date = parse_expiry(text)?;
        self.pick(Some(date));
        Ok(())
    }

    /// Focus left the picker.
    pub fn blur(&mut self) {
        trace!("{}: blur", self.label);
        self.blurred = true;
    }

    /// No date, never blurred.
    pub fn reset(&mut self) {
        self.date = None;
        self.blurred = false;
    }
}
