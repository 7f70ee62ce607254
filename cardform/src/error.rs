// cardform-rs/cardform/src/error.rs

use thiserror::Error;

use crate::types::FieldId;

/// Common error type.
///
/// Validators never produce an `Error`: an invalid field is reported through
/// [`crate::Validation`]. These variants cover operations with no sensible
/// total result, such as confirming an incomplete form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The option value does not name a known card type.
    #[error("unknown card type: {0:?}")]
    UnknownCardType(String),

    /// Keyboard entry for the expiry date did not match `MM/YYYY`.
    #[error("invalid expiry date format: expected MM/YYYY, got {0:?}")]
    InvalidExpiryFormat(String),

    /// The form cannot be confirmed while this field is invalid or unset.
    #[error("form incomplete: {0} is invalid or missing")]
    Incomplete(FieldId),

    /// Form configuration out of range.
    #[error("invalid form config: {0}")]
    InvalidConfig(String),

    /// The submit sink rejected the payment details.
    #[error("submit failed: {0}")]
    Sink(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
