// cardform-rs/cardform/src/form/mod.rs

use chrono::NaiveDate;
use log::{debug, info, trace};

use crate::clock::Clock;
use crate::field::{Commit, ExpiryField, NumberField, SelectField, TextField};
use crate::input::Key;
use crate::sink::SubmitSink;
use crate::types::{CardType, FieldId, NumericValue};
use crate::validation::Validation;
use crate::{Error, Result};

/// Form construction.
pub mod builder;
mod config;
mod details;

pub use builder::PaymentFormBuilder;
pub use config::{FormConfig, MAX_DIGITS};
pub use details::PaymentDetails;

/// A value owned by the form, as last committed by its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    /// Last committed value.
    pub value: T,
    /// Whether it was valid when committed.
    pub valid: bool,
}

impl<T> Committed<T> {
    fn unset(value: T) -> Self {
        Self {
            value,
            valid: false,
        }
    }
}

impl<T> From<Commit<T>> for Committed<T> {
    fn from(c: Commit<T>) -> Self {
        Self {
            value: c.value,
            valid: c.valid,
        }
    }
}

/// The payment details form.
///
/// Fields are addressed by [`FieldId`]. Events go through `focus`, `key`,
/// `input` and `blur`; the form applies whatever the fields commit. The
/// submit gate ([`PaymentForm::is_valid`]) requires every field to be set,
/// committed valid and valid in its current draft.
pub struct PaymentForm {
    config: FormConfig,
    clock: Box<dyn Clock>,
    card_type_field: SelectField,
    cardholder_field: TextField,
    card_number_field: NumberField,
    cvc_field: NumberField,
    expiry_field: ExpiryField,
    card_type: Option<CardType>,
    cardholder: Committed<String>,
    card_number: Committed<NumericValue>,
    cvc: Committed<NumericValue>,
}

impl PaymentForm {
    /// Empty form. Prefer [`PaymentFormBuilder`], which checks the config.
    pub fn new(config: FormConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            card_type_field: SelectField::new(FieldId::CardType.label()),
            cardholder_field: TextField::cardholder(FieldId::Cardholder.label()),
            card_number_field: NumberField::digits(
                FieldId::CardNumber.label(),
                config.card_number_digits,
            ),
            cvc_field: NumberField::digits(FieldId::Cvc.label(), config.cvc_digits),
            expiry_field: ExpiryField::new(FieldId::ExpiryDate.label()),
            card_type: None,
            cardholder: Committed::unset(String::new()),
            card_number: Committed::unset(NumericValue::EMPTY),
            cvc: Committed::unset(NumericValue::EMPTY),
            config,
            clock,
        }
    }

    /// Start a [`PaymentFormBuilder`].
    pub fn builder() -> PaymentFormBuilder {
        PaymentFormBuilder::new()
    }

    /// Digit limits in use.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Today according to the form's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // --- committed values ---

    /// Selected card type.
    pub fn card_type(&self) -> Option<CardType> {
        self.card_type
    }

    /// Committed cardholder name.
    pub fn cardholder(&self) -> &Committed<String> {
        &self.cardholder
    }

    /// Committed card number.
    pub fn card_number(&self) -> &Committed<NumericValue> {
        &self.card_number
    }

    /// Committed CVC.
    pub fn cvc(&self) -> &Committed<NumericValue> {
        &self.cvc
    }

    /// Picked expiry date.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_field.date()
    }

    // --- events ---

    /// Focus entered `field`.
    pub fn focus(&mut self, field: FieldId) {
        trace!("focus {}", field);
        if field == FieldId::CardType {
            self.card_type_field.focus();
        }
    }

    /// Keystroke gate. Only the numeric fields filter keys.
    pub fn key(&self, field: FieldId, key: Key) -> bool {
        match field {
            FieldId::CardNumber => self.card_number_field.key(key),
            FieldId::Cvc => self.cvc_field.key(key),
            _ => true,
        }
    }

    /// Raw text from the field's input. For the card type this is the
    /// option value, for the expiry date `MM/YYYY`.
    pub fn input(&mut self, field: FieldId, text: &str) -> Result<()> {
        match field {
            FieldId::CardType => {
                if let Some(c) = self.card_type_field.select(text)? {
                    self.card_type = Some(c.value);
                }
            }
            FieldId::Cardholder => {
                if let Some(c) = self.cardholder_field.input(text) {
                    self.cardholder = c.into();
                }
            }
            FieldId::CardNumber => {
                if let Some(c) = self.card_number_field.input(text) {
                    self.card_number = c.into();
                }
            }
            FieldId::Cvc => {
                if let Some(c) = self.cvc_field.input(text) {
                    self.cvc = c.into();
                }
            }
            FieldId::ExpiryDate => self.expiry_field.type_text(text)?,
        }
        Ok(())
    }

    /// Focus left `field`.
    pub fn blur(&mut self, field: FieldId) {
        match field {
            FieldId::CardType => trace!("blur {}", field),
            FieldId::Cardholder => {
                if let Some(c) = self.cardholder_field.blur() {
                    self.cardholder = c.into();
                }
            }
            FieldId::CardNumber => self.card_number_field.blur(),
            FieldId::Cvc => self.cvc_field.blur(),
            FieldId::ExpiryDate => self.expiry_field.blur(),
        }
    }

    /// Choose a card type from the menu.
    pub fn select_card_type(&mut self, card_type: CardType) {
        let c = self.card_type_field.choose(card_type);
        self.card_type = Some(c.value);
    }

    /// Date chosen in the picker; `None` clears it.
    pub fn pick_expiry(&mut self, date: Option<NaiveDate>) {
        self.expiry_field.pick(date);
    }

    // --- queries ---

    /// What the field currently shows: its draft, or the option value.
    pub fn display(&self, field: FieldId) -> String {
        match field {
            FieldId::CardType => self
                .card_type_field
                .value()
                .map(|t| t.value().to_string())
                .unwrap_or_default(),
            FieldId::Cardholder => self.cardholder_field.draft().to_string(),
            FieldId::CardNumber => self.card_number_field.display().to_string(),
            FieldId::Cvc => self.cvc_field.display().to_string(),
            FieldId::ExpiryDate => self.expiry_field.display(),
        }
    }

    /// Validation of the field as currently displayed.
    pub fn validation(&self, field: FieldId) -> Validation {
        match field {
            FieldId::CardType => self.card_type_field.validation(),
            FieldId::Cardholder => self.cardholder_field.validation(),
            FieldId::CardNumber => self.card_number_field.validation(),
            FieldId::Cvc => self.cvc_field.validation(),
            FieldId::ExpiryDate => self.expiry_field.validation(self.today()),
        }
    }

    /// Set, committed valid, and valid as displayed.
    pub fn is_field_valid(&self, field: FieldId) -> bool {
        let committed = match field {
            FieldId::CardType => self.card_type.is_some(),
            FieldId::Cardholder => !self.cardholder.value.is_empty() && self.cardholder.valid,
            FieldId::CardNumber => !self.card_number.value.is_empty() && self.card_number.valid,
            FieldId::Cvc => !self.cvc.value.is_empty() && self.cvc.valid,
            FieldId::ExpiryDate => self.expiry_field.date().is_some(),
        };
        committed && self.validation(field).valid
    }

    /// First field, in form order, that blocks submission.
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|f| !self.is_field_valid(*f))
    }

    /// Submit gate.
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    // --- submission ---

    /// Snapshot of the committed values, or the first field blocking it.
    pub fn confirm(&self) -> Result<PaymentDetails> {
        if let Some(field) = self.first_invalid() {
            return Err(Error::Incomplete(field));
        }
        let card_type = self.card_type.ok_or(Error::Incomplete(FieldId::CardType))?;
        let expiry = self
            .expiry_field
            .date()
            .ok_or(Error::Incomplete(FieldId::ExpiryDate))?;
        Ok(PaymentDetails::new(
            card_type,
            self.cardholder.value.clone(),
            self.card_number.value,
            self.cvc.value,
            expiry,
        ))
    }

    /// Confirm and hand the details to `sink`.
    pub fn submit<S: SubmitSink + ?Sized>(&self, sink: &mut S) -> Result<PaymentDetails> {
        let details = self.confirm()?;
        info!("submitting payment details");
        sink.submit(&details)?;
        Ok(details)
    }

    /// Push known values into every field, as if committed. Each value is
    /// validated on the way in; an invalid one is committed as invalid and
    /// keeps the gate closed until it is corrected.
    pub fn prefill(&mut self, details: &PaymentDetails) {
        self.card_type = Some(details.card_type());
        self.card_type_field.set_committed(self.card_type);
        self.cardholder = self.cardholder_field.prefill(details.cardholder()).into();
        self.card_number = self.card_number_field.prefill(details.card_number()).into();
        self.cvc = self.cvc_field.prefill(details.cvc()).into();
        self.expiry_field.pick(Some(details.expiry()));
        if let Some(field) = self.first_invalid() {
            debug!("prefill left {} invalid", field);
        }
    }

    /// Back to a fresh, empty form.
    pub fn reset(&mut self) {
        self.card_type_field.reset();
        self.cardholder_field.reset();
        self.card_number_field.reset();
        self.cvc_field.reset();
        self.expiry_field.reset();
        self.card_type = None;
        self.cardholder = Committed::unset(String::new());
        self.card_number = Committed::unset(NumericValue::EMPTY);
        self.cvc = Committed::unset(NumericValue::EMPTY);
    }
}
