//! Fake data port
//!
//! Generation never reaches for a platform RNG directly. Every random draw
//! (integers, dates, names, identifiers) flows through a [`FakeDataProvider`],
//! so a seeded adapter reproduces a claimant exactly and tests can script
//! the draws they care about.
//!
//! ```rust,ignore
//! let mut provider = RandomFakeDataProvider::seeded(42);
//! let dob = provider.date_within_past_years(today, 70);
//! let name = provider.first_name();
//! ```

use chrono::NaiveDate;
use uuid::Uuid;

/// Capability supplying random primitives to the generators
///
/// Implementations are stateful (they own an RNG stream) and are used from a
/// single task at a time. Parallel generation gives each task its own
/// provider rather than sharing one.
pub trait FakeDataProvider {
    /// Uniform integer in `[min, max]`, both ends inclusive
    fn integer_between(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`
    fn unit_interval(&mut self) -> f64;

    /// Uniform day in `[start, end]`; reversed bounds are swapped
    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate;

    /// Day in `[start, end]` biased toward `start`
    ///
    /// `skew` in `(0, 1)` concentrates draws near the start of the window
    /// (smaller is stronger). Values outside that range draw uniformly.
    fn date_between_skewed(&mut self, start: NaiveDate, end: NaiveDate, skew: f64) -> NaiveDate;

    /// Uniform day within the `years` (365-day) years up to and including `today`
    fn date_within_past_years(&mut self, today: NaiveDate, years: u32) -> NaiveDate;

    fn first_name(&mut self) -> String;

    fn last_name(&mut self) -> String;

    /// A fresh unique identifier
    fn unique_id(&mut self) -> Uuid;
}

impl<P: FakeDataProvider + ?Sized> FakeDataProvider for &mut P {
    fn integer_between(&mut self, min: i64, max: i64) -> i64 {
        (**self).integer_between(min, max)
    }

    fn unit_interval(&mut self) -> f64 {
        (**self).unit_interval()
    }

    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        (**self).date_between(start, end)
    }

    fn date_between_skewed(&mut self, start: NaiveDate, end: NaiveDate, skew: f64) -> NaiveDate {
        (**self).date_between_skewed(start, end, skew)
    }

    fn date_within_past_years(&mut self, today: NaiveDate, years: u32) -> NaiveDate {
        (**self).date_within_past_years(today, years)
    }

    fn first_name(&mut self) -> String {
        (**self).first_name()
    }

    fn last_name(&mut self) -> String {
        (**self).last_name()
    }

    fn unique_id(&mut self) -> Uuid {
        (**self).unique_id()
    }
}
