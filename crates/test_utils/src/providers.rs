//! Scripted fake data provider
//!
//! Replays queued draws so a test can walk the generator down an exact
//! path. Once a queue runs dry the provider falls back to the low end of
//! every range.

use std::collections::VecDeque;

use chrono::{Days, NaiveDate};
use core_kernel::FakeDataProvider;
use uuid::Uuid;

/// Where a scripted date lands inside the requested window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePick {
    Start,
    End,
    /// Days after the window start, clamped to the window end
    OffsetDays(u64),
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    units: VecDeque<f64>,
    integers: VecDeque<i64>,
    dates: VecDeque<DatePick>,
    issued_ids: u128,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values returned by `unit_interval`, in order
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Values returned by `integer_between`, clamped to the requested range
    pub fn with_integers(mut self, integers: impl IntoIterator<Item = i64>) -> Self {
        self.integers.extend(integers);
        self
    }

    /// Picks consumed by every date draw, in order
    pub fn with_dates(mut self, dates: impl IntoIterator<Item = DatePick>) -> Self {
        self.dates.extend(dates);
        self
    }

    /// True once every scripted value has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.integers.is_empty() && self.dates.is_empty()
    }

    fn pick(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        match self.dates.pop_front().unwrap_or(DatePick::Start) {
            DatePick::Start => start,
            DatePick::End => end,
            DatePick::OffsetDays(days) => start
                .checked_add_days(Days::new(days))
                .map_or(end, |d| d.min(end)),
        }
    }
}

impl FakeDataProvider for ScriptedProvider {
    fn integer_between(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.integers.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }

    fn unit_interval(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        self.pick(start, end)
    }

    fn date_between_skewed(&mut self, start: NaiveDate, end: NaiveDate, _skew: f64) -> NaiveDate {
        self.pick(start, end)
    }

    fn date_within_past_years(&mut self, today: NaiveDate, years: u32) -> NaiveDate {
        let earliest = today
            .checked_sub_days(Days::new(years as u64 * 365))
            .unwrap_or(NaiveDate::MIN);
        self.pick(earliest, today)
    }

    fn first_name(&mut self) -> String {
        "Test".to_string()
    }

    fn last_name(&mut self) -> String {
        "Claimant".to_string()
    }

    fn unique_id(&mut self) -> Uuid {
        self.issued_ids += 1;
        Uuid::from_u128(self.issued_ids)
    }
}
