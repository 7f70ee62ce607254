// cardform-rs/cardform/src/prelude.rs

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::field::{Commit, ExpiryField, Interaction, NumberField, SelectField, TextField};
pub use crate::form::{Committed, FormConfig, PaymentDetails, PaymentForm, PaymentFormBuilder};
pub use crate::input::{Key, accepts_numeric_key};
pub use crate::sink::{LogSink, RecordingSink, SubmitSink};
pub use crate::validation::{
    Validation, validate_card_digits, validate_cardholder_name, validate_expiry,
    validate_selection,
};
pub use crate::{CardType, Error, FieldId, NumericValue, Result};

// Re-export small date helpers for convenience
pub use crate::types::{format_expiry, month_offset, parse_expiry};
