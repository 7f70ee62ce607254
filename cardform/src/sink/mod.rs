// cardform-rs/cardform/src/sink/mod.rs

//! Submit sinks.

/// Sink that logs each field.
pub mod log;
/// Recording sink for tests.
pub mod mock;
/// The sink trait.
pub mod traits;

pub use self::log::LogSink;
pub use mock::RecordingSink;
pub use traits::SubmitSink;
