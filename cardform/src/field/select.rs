// cardform-rs/cardform/src/field/select.rs

use log::{debug, trace};

use super::Commit;
use crate::Result;
use crate::types::CardType;
use crate::validation::{Validation, validate_selection};

/// Card type select. A choice commits as soon as it is made; there is no
/// draft to settle.
#[derive(Debug, Clone)]
pub struct SelectField {
    label: String,
    value: Option<CardType>,
    focused: bool,
}

impl SelectField {
    /// Unselected and never focused.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            focused: false,
        }
    }

    /// Field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current choice.
    pub fn value(&self) -> Option<CardType> {
        self.value
    }

    /// Received focus without a choice being made since.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Menu options as `(value, label)` pairs.
    pub fn options(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        CardType::ALL.into_iter().map(|t| (t.value(), t.label()))
    }

    /// Validation of the current choice.
    pub fn validation(&self) -> Validation {
        validate_selection(self.value, self.focused, &self.label)
    }

    /// Focus entered the select.
    pub fn focus(&mut self) {
        trace!("{}: focus", self.label);
        self.focused = true;
    }

    /// Choose an option by its value. An empty value is no choice and
    /// leaves the field unchanged.
    pub fn select(&mut self, option: &str) -> Result<Option<Commit<CardType>>> {
        if option.is_empty() {
            return Ok(None);
        }
        let card_type: CardType = option.parse()?;
        Ok(Some(self.choose(card_type)))
    }

    /// Choose a known card type; always commits.
    pub fn choose(&mut self, card_type: CardType) -> Commit<CardType> {
        debug!("{}: commit {}", self.label, card_type);
        self.value = Some(card_type);
        self.focused = false;
        Commit::new(card_type, true)
    }

    /// The form pushed a value down.
    pub fn set_committed(&mut self, value: Option<CardType>) {
        self.value = value;
    }

    /// Unselected and never focused again.
    pub fn reset(&mut self) {
        self.value = None;
        self.focused = false;
    }
}
