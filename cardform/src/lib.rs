// cardform-rs/cardform/src/lib.rs

//! cardform
//!
//! Payment card details form: field validation, commit-on-valid drafts and
//! the submit gate, without any rendering.
#![warn(missing_docs)]

/// Source of the current day.
pub mod clock;
/// Limits, messages and key codes.
pub mod constants;
/// Crate error type.
pub mod error;
pub mod field;
/// The payment form and its configuration.
pub mod form;
pub mod input;
/// Common imports.
pub mod prelude;
/// Where confirmed details go.
pub mod sink;
pub mod test_support;
/// Value types shared by fields and form.
pub mod types;
pub mod validation;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// the value types and `Validation` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;
pub use crate::validation::Validation;

pub use prelude::*;
