// cardform-rs/cardform/src/types.rs

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use derive_more::Display;

use crate::constants::{EXPIRY_FORMAT, NUMERIC_SENTINEL};
use crate::{Error, Result};

/// Numeric field value - Newtype Pattern over the `-1` sentinel
///
/// `EMPTY` is the only representation of "nothing entered yet", which keeps
/// it apart from a literal `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericValue(i64);

impl NumericValue {
    /// The `-1` sentinel: nothing entered yet.
    pub const EMPTY: Self = Self(NUMERIC_SENTINEL);

    /// Largest representable value (19 digits).
    pub const MAX: Self = Self(i64::MAX);

    /// Wrap a raw value. Negative values collapse to `EMPTY`.
    pub const fn new(value: i64) -> Self {
        if value < 0 { Self::EMPTY } else { Self(value) }
    }

    /// Parse raw field text. Empty text and any parse failure map to `EMPTY`,
    /// except a run of digits too long for `i64`: it saturates at
    /// [`NumericValue::MAX`], which is longer than any configurable limit.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::EMPTY;
        }
        match text.parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow && is_digits(text) => Self::MAX,
            Err(_) => Self::EMPTY,
        }
    }

    /// Raw integer; `-1` for `EMPTY`.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Nothing entered.
    pub fn is_empty(&self) -> bool {
        self.0 < 0
    }

    /// Decimal digit count of the value; `None` for `EMPTY`.
    pub fn digit_count(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut n = self.0;
        let mut count = 1;
        while n >= 10 {
            n /= 10;
            count += 1;
        }
        Some(count)
    }

    /// Text shown in the input: blank for `EMPTY`.
    pub fn display(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            self.0.to_string()
        }
    }
}

/// `text` is non-empty and ASCII digits only.
pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl Default for NumericValue {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<u64> for NumericValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map(Self::new).unwrap_or(Self::EMPTY)
    }
}

/// CardType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// `visa`
    Visa,
    /// `mastercard`
    Mastercard,
    /// `amex`, labelled American Express
    Amex,
}

impl CardType {
    /// Every selectable option, in menu order.
    pub const ALL: [CardType; 3] = [CardType::Visa, CardType::Mastercard, CardType::Amex];

    /// Option value submitted by the select input
    pub fn value(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardType::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| Error::UnknownCardType(s.to_string()))
    }
}

/// FieldId - one per form input; `Display` yields the field label
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Card type select
    #[display(fmt = "Card type")]
    CardType,
    /// Cardholder name text input
    #[display(fmt = "Cardholder name")]
    Cardholder,
    /// Card number digits
    #[display(fmt = "Card number")]
    CardNumber,
    /// CVC digits
    #[display(fmt = "CVC")]
    Cvc,
    /// Expiry date picker
    #[display(fmt = "Expiry date")]
    ExpiryDate,
}

impl FieldId {
    /// Fields in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::CardType,
        FieldId::Cardholder,
        FieldId::CardNumber,
        FieldId::Cvc,
        FieldId::ExpiryDate,
    ];

    /// Label shown next to the input.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

/// Parse keyboard entry of an expiry date (`MM/YYYY`) into the first day of
/// that month.
pub fn parse_expiry(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    let bad = || Error::InvalidExpiryFormat(text.to_string());

    let (month, year) = text.split_once('/').ok_or_else(bad)?;
    if month.len() != 2 || year.len() != 4 {
        return Err(bad());
    }
    if !month.chars().chain(year.chars()).all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }
    let month: u32 = month.parse().map_err(|_| bad())?;
    let year: i32 = year.parse().map_err(|_| bad())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(bad)
}

/// Format a date the way the expiry input displays it (`MM/YYYY`).
pub fn format_expiry(date: NaiveDate) -> String {
    date.format(EXPIRY_FORMAT).to_string()
}

/// First day of the month `months` after the month containing `date`.
/// Negative values step backwards.
pub fn month_offset(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
