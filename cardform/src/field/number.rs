// cardform-rs/cardform/src/field/number.rs

use log::{debug, trace};

use super::{Commit, Interaction};
use crate::input::{Key, accepts_numeric_key};
use crate::types::NumericValue;
use crate::validation::{Validation, validate_card_digits};

/// Validator signature for digit fields: `(value, touched, blurred, limit, label)`.
pub type NumberValidator = fn(NumericValue, bool, bool, usize, &str) -> Validation;

/// Digits-only field (card number, CVC) with a local draft.
#[derive(Debug, Clone)]
pub struct NumberField {
    label: String,
    limit: usize,
    text: String,
    draft: NumericValue,
    committed: NumericValue,
    interaction: Interaction,
    validator: NumberValidator,
}

impl NumberField {
    /// Empty field checked by `validator`.
    pub fn new(label: impl Into<String>, limit: usize, validator: NumberValidator) -> Self {
        Self {
            label: label.into(),
            limit,
            text: String::new(),
            draft: NumericValue::EMPTY,
            committed: NumericValue::EMPTY,
            interaction: Interaction::default(),
            validator,
        }
    }

    /// Field requiring exactly `limit` digits. Limits above
    /// [`crate::form::MAX_DIGITS`] cannot be told apart from overlong input.
    pub fn digits(label: impl Into<String>, limit: usize) -> Self {
        Self::new(label, limit, validate_card_digits)
    }

    /// Field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Required digit count.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Parsed draft.
    pub fn draft(&self) -> NumericValue {
        self.draft
    }

    /// Last committed value.
    pub fn committed(&self) -> NumericValue {
        self.committed
    }

    /// Current interaction flags.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// What the input shows: the digits as typed, blank while the draft is
    /// empty.
    pub fn display(&self) -> &str {
        if self.draft.is_empty() { "" } else { &self.text }
    }

    /// Validation of the current draft.
    pub fn validation(&self) -> Validation {
        (self.validator)(
            self.draft,
            self.interaction.touched,
            self.interaction.blurred,
            self.limit,
            &self.label,
        )
    }

    /// Keystroke gate; `false` means the key must not reach the input.
    pub fn key(&self, key: Key) -> bool {
        let accepted = accepts_numeric_key(key);
        if !accepted {
            debug!("{}: rejected key {:?}", self.label, key);
        }
        accepted
    }

    /// Replace the draft with the parsed text. Unparsable text becomes the
    /// empty sentinel.
    pub fn input(&mut self, text: &str) -> Option<Commit<NumericValue>> {
        trace!("{}: input {:?}", self.label, text);
        let value = NumericValue::parse(text);
        self.interaction.touched = value != self.committed;
        self.text = text.trim().to_string();
        self.draft = value;
        self.settle()
    }

    /// Marks the field blurred; never commits.
    pub fn blur(&mut self) {
        trace!("{}: blur", self.label);
        self.interaction.blurred = true;
    }

    /// The form pushed a value down; it replaces the draft.
    pub fn set_committed(&mut self, value: NumericValue) {
        self.committed = value;
        self.draft = value;
        self.text = value.display();
    }

    /// Push a value down that did not come from typing. The returned commit
    /// carries the validator's verdict on it, judged as if typed; an invalid
    /// value leaves the field touched so its error shows.
    pub fn prefill(&mut self, value: NumericValue) -> Commit<NumericValue> {
        self.set_committed(value);
        let valid = !value.is_empty()
            && (self.validator)(value, true, false, self.limit, &self.label).valid;
        self.interaction = Interaction {
            touched: !valid,
            blurred: false,
        };
        Commit::new(value, valid)
    }

    /// Back to an empty, untouched field.
    pub fn reset(&mut self) {
        self.set_committed(NumericValue::EMPTY);
        self.interaction = Interaction::default();
    }

    // A zero draft never commits, even when it has the required length.
    fn settle(&mut self) -> Option<Commit<NumericValue>> {
        if !self.interaction.touched || self.draft.is_empty() || self.draft.as_i64() == 0 {
            return None;
        }
        if !self.validation().valid {
            return None;
        }
        debug!("{}: commit {}", self.label, self.draft.as_i64());
        self.committed = self.draft;
        self.interaction = Interaction::default();
        Some(Commit::new(self.draft, true))
    }
}
