//! Source of "today" for the date-dependent rules.
//!
//! The validators themselves take the current day as an argument; a [`Clock`]
//! only exists at the call site that owns a [`Validator`](crate::Validator).
//! Production code uses [`SystemClock`], tests pin the day with
//! [`FixedClock`].

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Current calendar day in the user's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always answers with the same day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
