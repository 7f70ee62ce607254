// cardform-rs/cardform/src/field/text.rs

use log::{debug, trace};

use super::{Commit, Interaction};
use crate::validation::{Validation, validate_cardholder_name};

/// Validator signature for text fields: `(value, touched, blurred)`.
pub type TextValidator = fn(&str, bool, bool) -> Validation;

/// Free-text field with a local draft.
#[derive(Debug, Clone)]
pub struct TextField {
    label: String,
    draft: String,
    committed: String,
    interaction: Interaction,
    validator: TextValidator,
}

impl TextField {
    /// Empty field checked by `validator`.
    pub fn new(label: impl Into<String>, validator: TextValidator) -> Self {
        Self {
            label: label.into(),
            draft: String::new(),
            committed: String::new(),
            interaction: Interaction::default(),
            validator,
        }
    }

    /// Field wired to the cardholder name rules.
    pub fn cardholder(label: impl Into<String>) -> Self {
        Self::new(label, validate_cardholder_name)
    }

    /// Field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text as typed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Last committed value.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Current interaction flags.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Validation of the draft as it would be committed, i.e. trimmed.
    pub fn validation(&self) -> Validation {
        self.check(self.draft.trim(), self.interaction.touched)
    }

    fn check(&self, value: &str, touched: bool) -> Validation {
        (self.validator)(value, touched, self.interaction.blurred)
    }

    /// Replace the draft with new text. Returns the commit if the new draft
    /// is valid and differs from the committed value.
    pub fn input(&mut self, text: &str) -> Option<Commit<String>> {
        trace!("{}: input {:?}", self.label, text);
        self.interaction.touched = text.trim() != self.committed;
        self.draft = text.to_string();
        self.settle()
    }

    /// Focus left the field. A pending valid change is committed instead of
    /// marking the field blurred.
    pub fn blur(&mut self) -> Option<Commit<String>> {
        trace!("{}: blur", self.label);
        let commit = self.settle();
        if commit.is_none() {
            self.interaction.blurred = true;
        }
        commit
    }

    /// The form pushed a value down; it replaces the draft.
    pub fn set_committed(&mut self, value: &str) {
        self.committed = value.to_string();
        self.draft = value.to_string();
    }

    /// Push a value down that did not come from typing. The returned commit
    /// carries the validator's verdict on it, judged as if typed; an invalid
    /// value leaves the field touched so its error shows.
    pub fn prefill(&mut self, value: &str) -> Commit<String> {
        let value = value.trim();
        self.set_committed(value);
        let valid = self.check(value, true).valid;
        self.interaction = Interaction {
            touched: !valid,
            blurred: false,
        };
        Commit::new(value.to_string(), valid)
    }

    /// Back to an empty, untouched field.
    pub fn reset(&mut self) {
        self.set_committed("");
        self.interaction = Interaction::default();
    }

    // The trimmed draft is what gets committed, so it is also what must pass.
    fn settle(&mut self) -> Option<Commit<String>> {
        if !self.interaction.touched || !self.validation().valid {
            return None;
        }
        let value = self.draft.trim().to_string();
        debug!("{}: commit {:?}", self.label, value);
        self.committed = value.clone();
        self.interaction.touched = false;
        Some(Commit::new(value, true))
    }
}
