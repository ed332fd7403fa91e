//! Pre-built Test Fixtures
//!
//! All fixtures are anchored to a fixed reference day so expectations do not
//! drift with the wall clock.

use chrono::{Days, NaiveDate};
use core_kernel::FixedClock;
use domain_eligibility::EligibilityRecord;
use domain_party::GeneratorConfig;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference "today" (Oct 18, 2026)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    pub fn clock() -> FixedClock {
        FixedClock(Self::today())
    }

    pub fn tomorrow() -> NaiveDate {
        Self::today() + Days::new(1)
    }

    pub fn yesterday() -> NaiveDate {
        Self::today() - Days::new(1)
    }

    /// `years` 365-day years before today
    pub fn years_ago(years: u64) -> NaiveDate {
        Self::today() - Days::new(years * 365)
    }

    /// Date of birth for a 30-year-old claimant
    pub fn date_of_birth_30() -> NaiveDate {
        Self::years_ago(30)
    }
}

/// Fixture for eligibility records
pub struct RecordFixtures;

impl RecordFixtures {
    /// Dependent coverage from six years ago until yesterday
    pub fn six_year_dependent() -> EligibilityRecord {
        EligibilityRecord::dependent(TemporalFixtures::years_ago(6))
            .with_termination(TemporalFixtures::yesterday(), TemporalFixtures::today())
            .unwrap()
    }

    /// Dependent coverage from two years ago that has not ended
    pub fn active_dependent() -> EligibilityRecord {
        EligibilityRecord::dependent(TemporalFixtures::years_ago(2))
    }

    /// Employee terminated three days ago, still inside the grace period
    pub fn employee_pending_grace() -> EligibilityRecord {
        let elig_start = TemporalFixtures::years_ago(3);
        EligibilityRecord::employee(elig_start, elig_start - Days::new(7))
            .unwrap()
            .with_termination(TemporalFixtures::today() - Days::new(3), TemporalFixtures::today())
            .unwrap()
    }
}

/// Fixture for generator configuration
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// Default configuration with a fixed master seed
    pub fn seeded(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }
}
