// cardform-rs/cardform/src/sink/log.rs

use log::info;

use super::traits::SubmitSink;
use crate::Result;
use crate::form::PaymentDetails;

/// Sink that writes each submitted value to the `log` facade at `info`
/// level, one line per field.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    /// New log sink.
    pub fn new() -> Self {
        Self
    }
}

impl SubmitSink for LogSink {
    fn submit(&mut self, details: &PaymentDetails) -> Result<()> {
        for line in details.lines() {
            info!("{}", line);
        }
        Ok(())
    }
}
