//! Eligibility record value object
//!
//! A record is one coverage period. Its optional dates are only reachable
//! through the constructors and [`EligibilityRecord::with_termination`], so
//! every record in circulation satisfies the type/date invariants below:
//!
//! - an `employee` record always carries `start_date`; `dependent` and
//!   `retiree` records never do
//! - `termed_date` (the raw termination) only appears on employees
//! - `elig_term_date` (effective end of eligibility) is never before
//!   `elig_start_date`, nor before `termed_date` when both are present
//!
//! Records arriving through serde are checked against the same rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{shift_days, DateRange};
use crate::error::EligibilityError;

/// Days between a raw employee termination and the end of eligibility
pub const GRACE_PERIOD_DAYS: i64 = 7;

/// Kind of coverage a period represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityType {
    Employee,
    Dependent,
    Retiree,
}

/// Lifecycle phase of a record, derived from which dates are present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoveragePhase {
    /// Dependent coverage with no end yet
    ActiveDependent,
    /// Employee coverage with no termination yet
    ActiveEmployee,
    /// Employee terminated, grace period not yet elapsed
    TermedPendingGrace,
    /// Eligibility has ended
    TermedEffective,
    /// Trailing retiree coverage, open or closed
    Retiree,
}

/// One coverage period in a claimant's eligibility history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEligibilityRecord")]
pub struct EligibilityRecord {
    #[serde(rename = "type")]
    eligibility_type: EligibilityType,
    elig_start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    termed_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elig_term_date: Option<NaiveDate>,
}

impl EligibilityRecord {
    /// Open dependent coverage starting on `elig_start_date`
    pub fn dependent(elig_start_date: NaiveDate) -> Self {
        Self {
            eligibility_type: EligibilityType::Dependent,
            elig_start_date,
            start_date: None,
            termed_date: None,
            elig_term_date: None,
        }
    }

    /// Open employee coverage; `start_date` is the employment start
    pub fn employee(
        elig_start_date: NaiveDate,
        start_date: NaiveDate,
    ) -> Result<Self, EligibilityError> {
        if start_date > elig_start_date {
            return Err(EligibilityError::invalid_record(format!(
                "employment start {} is after eligibility start {}",
                start_date, elig_start_date
            )));
        }
        Ok(Self {
            eligibility_type: EligibilityType::Employee,
            elig_start_date,
            start_date: Some(start_date),
            termed_date: None,
            elig_term_date: None,
        })
    }

    /// Open retiree coverage starting on `elig_start_date`
    pub fn retiree(elig_start_date: NaiveDate) -> Self {
        Self {
            eligibility_type: EligibilityType::Retiree,
            elig_start_date,
            start_date: None,
            termed_date: None,
            elig_term_date: None,
        }
    }

    /// Applies a computed termination as of `today`
    ///
    /// A day counts as past from its own midnight, so a termination on
    /// `today` already applies; only later terminations leave the record
    /// open. A past termination ends dependent and retiree eligibility
    /// directly. For an employee it becomes `termed_date`, and eligibility
    /// ends [`GRACE_PERIOD_DAYS`] later once that day has also been reached.
    pub fn with_termination(
        mut self,
        term_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, EligibilityError> {
        if term_date < self.elig_start_date {
            return Err(EligibilityError::invalid_record(format!(
                "termination {} precedes eligibility start {}",
                term_date, self.elig_start_date
            )));
        }
        if term_date > today {
            return Ok(self);
        }

        match self.eligibility_type {
            EligibilityType::Employee => {
                self.termed_date = Some(term_date);
                let effective = shift_days(term_date, GRACE_PERIOD_DAYS)?;
                if effective <= today {
                    self.elig_term_date = Some(effective);
                }
            }
            EligibilityType::Dependent | EligibilityType::Retiree => {
                self.elig_term_date = Some(term_date);
            }
        }
        Ok(self)
    }

    pub fn eligibility_type(&self) -> EligibilityType {
        self.eligibility_type
    }

    pub fn elig_start_date(&self) -> NaiveDate {
        self.elig_start_date
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn termed_date(&self) -> Option<NaiveDate> {
        self.termed_date
    }

    pub fn elig_term_date(&self) -> Option<NaiveDate> {
        self.elig_term_date
    }

    pub fn phase(&self) -> CoveragePhase {
        match (self.eligibility_type, self.termed_date, self.elig_term_date) {
            (EligibilityType::Retiree, _, _) => CoveragePhase::Retiree,
            (_, _, Some(_)) => CoveragePhase::TermedEffective,
            (_, Some(_), None) => CoveragePhase::TermedPendingGrace,
            (EligibilityType::Employee, None, None) => CoveragePhase::ActiveEmployee,
            (EligibilityType::Dependent, None, None) => CoveragePhase::ActiveDependent,
        }
    }

    /// True while eligibility has no effective end
    pub fn is_active(&self) -> bool {
        self.elig_term_date.is_none()
    }

    /// Days from eligibility start to effective end, if ended
    pub fn coverage_days(&self) -> Option<i64> {
        self.elig_term_date
            .map(|end| (end - self.elig_start_date).num_days())
    }

    /// Window in which claims against this period may fall
    ///
    /// Open records collapse to their start day.
    pub fn claim_window(&self) -> DateRange {
        DateRange {
            start: self.elig_start_date,
            end: self.elig_term_date.unwrap_or(self.elig_start_date),
        }
    }

    fn validate(&self) -> Result<(), EligibilityError> {
        match (self.eligibility_type, self.start_date) {
            (EligibilityType::Employee, None) => {
                return Err(EligibilityError::invalid_record("employee record without start_date"));
            }
            (EligibilityType::Dependent | EligibilityType::Retiree, Some(_)) => {
                return Err(EligibilityError::invalid_record(format!(
                    "{:?} record must not carry start_date",
                    self.eligibility_type
                )));
            }
            _ => {}
        }
        if self.termed_date.is_some() && self.eligibility_type != EligibilityType::Employee {
            return Err(EligibilityError::invalid_record("termed_date is only valid on employee records"));
        }
        if let Some(start) = self.start_date.filter(|s| *s > self.elig_start_date) {
            return Err(EligibilityError::invalid_record(format!(
                "start_date {} is after elig_start_date {}",
                start, self.elig_start_date
            )));
        }
        for (field, date) in [("termed_date", self.termed_date), ("elig_term_date", self.elig_term_date)] {
            if let Some(date) = date.filter(|d| *d < self.elig_start_date) {
                return Err(EligibilityError::invalid_record(format!(
                    "{} {} precedes elig_start_date {}",
                    field, date, self.elig_start_date
                )));
            }
        }
        if let (Some(termed), Some(end)) = (self.termed_date, self.elig_term_date) {
            if end < termed {
                return Err(EligibilityError::invalid_record(format!(
                    "elig_term_date {} precedes termed_date {}",
                    end, termed
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawEligibilityRecord {
    #[serde(rename = "type")]
    eligibility_type: EligibilityType,
    elig_start_date: NaiveDate,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    termed_date: Option<NaiveDate>,
    #[serde(default)]
    elig_term_date: Option<NaiveDate>,
}

impl TryFrom<RawEligibilityRecord> for EligibilityRecord {
    type Error = EligibilityError;

    fn try_from(raw: RawEligibilityRecord) -> Result<Self, Self::Error> {
        let record = EligibilityRecord {
            eligibility_type: raw.eligibility_type,
            elig_start_date: raw.elig_start_date,
            start_date: raw.start_date,
            termed_date: raw.termed_date,
            elig_term_date: raw.elig_term_date,
        };
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    #[test]
    fn test_future_termination_leaves_record_open() {
        let record = EligibilityRecord::dependent(date(2020, 1, 1))
            .with_termination(date(2030, 1, 1), today())
            .unwrap();

        assert!(record.is_active());
        assert_eq!(record.phase(), CoveragePhase::ActiveDependent);
    }

    #[test]
    fn test_termination_on_today_ends_coverage() {
        let record = EligibilityRecord::dependent(date(2020, 1, 1))
            .with_termination(today(), today())
            .unwrap();
        assert_eq!(record.elig_term_date(), Some(today()));
        assert!(!record.is_active());

        let tomorrow = EligibilityRecord::dependent(date(2020, 1, 1))
            .with_termination(date(2026, 10, 19), today())
            .unwrap();
        assert!(tomorrow.is_active());
    }

    #[test]
    fn test_dependent_termination_is_effective_immediately() {
        let record = EligibilityRecord::dependent(date(2020, 1, 1))
            .with_termination(date(2022, 6, 30), today())
            .unwrap();

        assert_eq!(record.elig_term_date(), Some(date(2022, 6, 30)));
        assert_eq!(record.termed_date(), None);
        assert_eq!(record.phase(), CoveragePhase::TermedEffective);
    }

    #[test]
    fn test_employee_termination_promoted_after_grace() {
        let record = EligibilityRecord::employee(date(2020, 1, 8), date(2020, 1, 1))
            .unwrap()
            .with_termination(date(2022, 6, 30), today())
            .unwrap();

        assert_eq!(record.termed_date(), Some(date(2022, 6, 30)));
        assert_eq!(record.elig_term_date(), Some(date(2022, 7, 7)));
    }

    #[test]
    fn test_employee_termination_pending_grace() {
        // termed three days ago: grace ends in four days
        let record = EligibilityRecord::employee(date(2020, 1, 8), date(2020, 1, 1))
            .unwrap()
            .with_termination(date(2026, 10, 15), today())
            .unwrap();

        assert_eq!(record.termed_date(), Some(date(2026, 10, 15)));
        assert_eq!(record.elig_term_date(), None);
        assert_eq!(record.phase(), CoveragePhase::TermedPendingGrace);
        assert!(record.is_active());
    }

    #[test]
    fn test_grace_end_on_today_is_promoted() {
        let record = EligibilityRecord::employee(date(2020, 1, 8), date(2020, 1, 1))
            .unwrap()
            .with_termination(date(2026, 10, 11), today())
            .unwrap();
        assert_eq!(record.termed_date(), Some(date(2026, 10, 11)));
        assert_eq!(record.elig_term_date(), Some(today()));

        let record = EligibilityRecord::employee(date(2020, 1, 8), date(2020, 1, 1))
            .unwrap()
            .with_termination(date(2026, 10, 12), today())
            .unwrap();
        assert_eq!(record.elig_term_date(), None);
        assert_eq!(record.phase(), CoveragePhase::TermedPendingGrace);
    }

    #[test]
    fn test_employee_termed_today_is_pending_grace() {
        let record = EligibilityRecord::employee(date(2020, 1, 8), date(2020, 1, 1))
            .unwrap()
            .with_termination(today(), today())
            .unwrap();
        assert_eq!(record.termed_date(), Some(today()));
        assert_eq!(record.phase(), CoveragePhase::TermedPendingGrace);
    }

    #[test]
    fn test_termination_before_start_rejected() {
        let result = EligibilityRecord::retiree(date(2020, 1, 1))
            .with_termination(date(2019, 12, 31), today());
        assert!(matches!(result, Err(EligibilityError::InvalidRecord(_))));
    }

    #[test]
    fn test_employee_start_after_eligibility_rejected() {
        assert!(EligibilityRecord::employee(date(2020, 1, 1), date(2020, 1, 2)).is_err());
    }

    #[test]
    fn test_claim_window_collapses_for_open_record() {
        let open = EligibilityRecord::retiree(date(2024, 2, 2));
        assert_eq!(open.claim_window(), DateRange::single_day(date(2024, 2, 2)));

        let closed = EligibilityRecord::retiree(date(2024, 2, 2))
            .with_termination(date(2024, 3, 3), today())
            .unwrap();
        assert_eq!(closed.claim_window().end, date(2024, 3, 3));
        assert_eq!(closed.coverage_days(), Some(30));
        assert_eq!(closed.phase(), CoveragePhase::Retiree);
    }

    #[test]
    fn test_serializes_with_optional_fields_omitted() {
        let record = EligibilityRecord::dependent(date(2021, 4, 5));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json, serde_json::json!({"type": "dependent", "elig_start_date": "2021-04-05"}));
    }

    #[test]
    fn test_deserialize_validates_invariants() {
        let ok: EligibilityRecord = serde_json::from_str(
            r#"{"type":"employee","elig_start_date":"2021-04-12","start_date":"2021-04-05","termed_date":"2022-01-01","elig_term_date":"2022-01-08"}"#,
        )
        .unwrap();
        assert_eq!(ok.phase(), CoveragePhase::TermedEffective);

        let missing_start = serde_json::from_str::<EligibilityRecord>(
            r#"{"type":"employee","elig_start_date":"2021-04-12"}"#,
        );
        assert!(missing_start.is_err());

        let termed_dependent = serde_json::from_str::<EligibilityRecord>(
            r#"{"type":"dependent","elig_start_date":"2021-04-12","termed_date":"2022-01-01"}"#,
        );
        assert!(termed_dependent.is_err());

        let retiree_with_start = serde_json::from_str::<EligibilityRecord>(
            r#"{"type":"retiree","elig_start_date":"2021-04-12","start_date":"2021-04-05"}"#,
        );
        assert!(retiree_with_start.is_err());
    }
}
