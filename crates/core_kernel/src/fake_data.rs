//! Default fake data adapter backed by `rand` and `fake`

use chrono::{Days, NaiveDate};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use crate::ports::FakeDataProvider;
use crate::temporal::DAYS_PER_YEAR;

/// [`FakeDataProvider`] over any `rand` generator
///
/// Defaults to ChaCha8 so a seed reproduces the same stream on every
/// platform.
#[derive(Debug, Clone)]
pub struct RandomFakeDataProvider<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl RandomFakeDataProvider<ChaCha8Rng> {
    /// Seeds from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Deterministic stream for the given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFakeDataProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    fn offset_date(start: NaiveDate, end: NaiveDate, offset: i64) -> NaiveDate {
        start
            .checked_add_days(Days::new(offset.max(0) as u64))
            .map_or(end, |d| d.min(end))
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl<R: Rng> FakeDataProvider for RandomFakeDataProvider<R> {
    fn integer_between(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    fn unit_interval(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let (start, end) = ordered(start, end);
        let span = (end - start).num_days();
        let offset = self.rng.gen_range(0..=span);
        Self::offset_date(start, end, offset)
    }

    fn date_between_skewed(&mut self, start: NaiveDate, end: NaiveDate, skew: f64) -> NaiveDate {
        let (start, end) = ordered(start, end);
        let span = (end - start).num_days();
        let u = self.rng.gen::<f64>();
        let fraction = if skew.is_finite() && skew > 0.0 && skew < 1.0 {
            u.powf(1.0 / skew)
        } else {
            u
        };
        // floor over span + 1 buckets keeps `end` reachable
        let offset = ((fraction * (span + 1) as f64).floor() as i64).min(span);
        Self::offset_date(start, end, offset)
    }

    fn date_within_past_years(&mut self, today: NaiveDate, years: u32) -> NaiveDate {
        let earliest = today
            .checked_sub_days(Days::new(years as u64 * DAYS_PER_YEAR as u64))
            .unwrap_or(NaiveDate::MIN);
        self.date_between(earliest, today)
    }

    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn unique_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}
