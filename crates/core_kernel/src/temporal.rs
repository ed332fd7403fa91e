//! Date handling for generated coverage periods
//!
//! All generation works at day granularity. A year is a fixed 365 days,
//! matching how tenure and retiree spans are measured.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of days counted as one year in tenure arithmetic
pub const DAYS_PER_YEAR: i64 = 365;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date arithmetic out of range: {0}")]
    OutOfRange(String),
}

/// Source of "today" for generation
///
/// Generation compares every date against a single reference day. Injecting
/// it keeps the history builder a pure function of its inputs.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// A one-day window
    pub fn single_day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Adds a (possibly negative) number of days, failing instead of panicking
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, TemporalError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| TemporalError::OutOfRange(format!("{} {:+} days", date, days)))
}

/// Adds whole 365-day years
pub fn shift_years(date: NaiveDate, years: i64) -> Result<NaiveDate, TemporalError> {
    shift_days(date, years * DAYS_PER_YEAR)
}
