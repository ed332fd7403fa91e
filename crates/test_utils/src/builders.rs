//! Test Data Builders
//!
//! Builders construct records and factories through their public
//! constructors, so anything built here obeys the same invariants as
//! generated data.

use chrono::{Days, NaiveDate};
use core_kernel::FixedClock;
use domain_eligibility::{EligibilityError, EligibilityRecord, EligibilityType};
use domain_party::{ClaimantError, ClaimantFactory, GeneratorConfig};

use crate::fixtures::TemporalFixtures;

/// Builder for eligibility records
pub struct EligibilityRecordBuilder {
    eligibility_type: EligibilityType,
    elig_start_date: NaiveDate,
    enrollment_lag_days: u64,
    term_date: Option<NaiveDate>,
    today: NaiveDate,
}

impl Default for EligibilityRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityRecordBuilder {
    /// Open dependent coverage starting five years before the reference day
    pub fn new() -> Self {
        Self {
            eligibility_type: EligibilityType::Dependent,
            elig_start_date: TemporalFixtures::years_ago(5),
            enrollment_lag_days: 7,
            term_date: None,
            today: TemporalFixtures::today(),
        }
    }

    pub fn employee(mut self) -> Self {
        self.eligibility_type = EligibilityType::Employee;
        self
    }

    pub fn dependent(mut self) -> Self {
        self.eligibility_type = EligibilityType::Dependent;
        self
    }

    pub fn retiree(mut self) -> Self {
        self.eligibility_type = EligibilityType::Retiree;
        self
    }

    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.elig_start_date = date;
        self
    }

    /// Days between employment start and eligibility start (employees only)
    pub fn with_enrollment_lag(mut self, days: u64) -> Self {
        self.enrollment_lag_days = days;
        self
    }

    pub fn terminated_on(mut self, date: NaiveDate) -> Self {
        self.term_date = Some(date);
        self
    }

    /// Day the termination is evaluated against
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn try_build(self) -> Result<EligibilityRecord, EligibilityError> {
        let record = match self.eligibility_type {
            EligibilityType::Employee => EligibilityRecord::employee(
                self.elig_start_date,
                self.elig_start_date - Days::new(self.enrollment_lag_days),
            )?,
            EligibilityType::Dependent => EligibilityRecord::dependent(self.elig_start_date),
            EligibilityType::Retiree => EligibilityRecord::retiree(self.elig_start_date),
        };
        match self.term_date {
            Some(term) => record.with_termination(term, self.today),
            None => Ok(record),
        }
    }

    /// # Panics
    ///
    /// Panics if the configured dates violate record invariants
    pub fn build(self) -> EligibilityRecord {
        self.try_build().expect("Failed to build eligibility record")
    }
}

/// Builder for claimant factories pinned to a fixed day
pub struct TestFactoryBuilder {
    config: GeneratorConfig,
    today: NaiveDate,
}

impl Default for TestFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFactoryBuilder {
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            today: TemporalFixtures::today(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn try_build(self) -> Result<ClaimantFactory<FixedClock>, ClaimantError> {
        ClaimantFactory::new(self.config, FixedClock(self.today))
    }

    pub fn build(self) -> ClaimantFactory<FixedClock> {
        self.try_build().expect("Failed to build claimant factory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_eligibility::CoveragePhase;

    #[test]
    fn test_default_record_is_open_dependent() {
        let record = EligibilityRecordBuilder::new().build();
        assert_eq!(record.phase(), CoveragePhase::ActiveDependent);
    }

    #[test]
    fn test_employee_with_old_termination() {
        let record = EligibilityRecordBuilder::new()
            .employee()
            .terminated_on(TemporalFixtures::years_ago(1))
            .build();

        assert_eq!(record.phase(), CoveragePhase::TermedEffective);
        assert_eq!(
            record.elig_term_date(),
            Some(TemporalFixtures::years_ago(1) + Days::new(7))
        );
    }

    #[test]
    fn test_enrollment_lag_sets_employment_start() {
        let start = TemporalFixtures::years_ago(4);
        let record = EligibilityRecordBuilder::new()
            .employee()
            .starting(start)
            .with_enrollment_lag(30)
            .build();

        assert_eq!(record.start_date(), Some(start - Days::new(30)));
        assert_eq!(record.phase(), CoveragePhase::ActiveEmployee);
    }

    #[test]
    fn test_type_switches() {
        let retiree = EligibilityRecordBuilder::new().employee().retiree().build();
        assert_eq!(retiree.phase(), CoveragePhase::Retiree);
        assert_eq!(retiree.start_date(), None);

        let dependent = EligibilityRecordBuilder::new().retiree().dependent().build();
        assert_eq!(dependent.eligibility_type(), EligibilityType::Dependent);
    }

    #[test]
    fn test_termination_evaluated_as_of_given_day() {
        let record = EligibilityRecordBuilder::new()
            .terminated_on(TemporalFixtures::years_ago(1))
            .as_of(TemporalFixtures::years_ago(2))
            .build();
        assert!(record.is_active());
    }

    #[test]
    fn test_termination_before_start_fails() {
        let result = EligibilityRecordBuilder::new()
            .terminated_on(TemporalFixtures::years_ago(10))
            .try_build();
        assert!(result.is_err());
    }
}
