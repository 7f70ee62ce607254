// cardform-rs/cardform/src/clock.rs

//! Source of "today" for expiry checks.
//!
//! The form never reads the system time directly, so tests can pin the
//! current day with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Clock trait abstracts the current date away from validation.
pub trait Clock {
    /// Current local calendar day
    fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
