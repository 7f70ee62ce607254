// cardform-rs/cardform/src/field/mod.rs

//! Per-field interaction state machines.
//!
//! Text and number fields keep a local draft apart from the value committed
//! to the form. Every event re-validates the draft; once the draft is valid
//! after a change, the field emits a [`Commit`] and clears its `touched`
//! flag. The form only ever sees values that were valid when committed.

/// Expiry date picker state.
pub mod expiry;
/// Digit fields.
pub mod number;
/// Card type select.
pub mod select;
/// Free-text fields.
pub mod text;

pub use expiry::ExpiryField;
pub use number::NumberField;
pub use select::SelectField;
pub use text::TextField;

/// Interaction history of a field.
///
/// `touched` means the draft differs from the committed value and has not
/// been committed yet. `blurred` means the field lost focus since the last
/// commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Changed since the last commit.
    pub touched: bool,
    /// Lost focus since the last commit.
    pub blurred: bool,
}

impl Interaction {
    /// Untouched and never blurred.
    pub fn pristine(&self) -> bool {
        !self.touched && !self.blurred
    }
}

/// A value propagated from a field to the form, with its validity at the
/// time of the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit<T> {
    /// Committed value.
    pub value: T,
    /// Whether it passed validation.
    pub valid: bool,
}

impl<T> Commit<T> {
    /// Commit of `value` with the given verdict.
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }
}
