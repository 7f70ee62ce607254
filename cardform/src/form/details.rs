// cardform-rs/cardform/src/form/details.rs

use chrono::NaiveDate;

use crate::types::{CardType, NumericValue, format_expiry};

/// Confirmed payment details handed to a [`crate::SubmitSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentDetails {
    card_type: CardType,
    cardholder: String,
    card_number: NumericValue,
    cvc: NumericValue,
    expiry: NaiveDate,
}

impl PaymentDetails {
    /// Snapshot of the given values. Nothing is validated here.
    pub fn new(
        card_type: CardType,
        cardholder: impl Into<String>,
        card_number: NumericValue,
        cvc: NumericValue,
        expiry: NaiveDate,
    ) -> Self {
        Self {
            card_type,
            cardholder: cardholder.into(),
            card_number,
            cvc,
            expiry,
        }
    }

    /// Selected card type.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Cardholder name, trimmed.
    pub fn cardholder(&self) -> &str {
        &self.cardholder
    }

    /// Card number.
    pub fn card_number(&self) -> NumericValue {
        self.card_number
    }

    /// Card verification code.
    pub fn cvc(&self) -> NumericValue {
        self.cvc
    }

    /// Expiry date, first day of the month.
    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// Expiry as `MM/YYYY`
    pub fn expiry_display(&self) -> String {
        format_expiry(self.expiry)
    }

    /// One `label: value` line per field, in form order.
    pub fn lines(&self) -> [String; 5] {
        [
            format!("Card type: {}", self.card_type),
            format!("Cardholder: {}", self.cardholder),
            format!("Card number: {}", self.card_number.display()),
            format!("CVC: {}", self.cvc.display()),
            format!("Expiry date: {}", self.expiry_display()),
        ]
    }
}
