//! Eligibility Domain
//!
//! This crate generates a claimant's eligibility history: the chronological
//! sequence of coverage periods (employee, dependent, retiree) that claims
//! are later anchored to.
//!
//! # Period Lifecycle
//!
//! ```text
//! Active -> Termed (employee, 7-day grace) -> Termed Effective -> [Retiree]
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::RandomFakeDataProvider;
//! use domain_eligibility::EligibilityHistoryBuilder;
//!
//! let builder = EligibilityHistoryBuilder::new().unwrap();
//! let mut provider = RandomFakeDataProvider::seeded(11);
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let born = NaiveDate::from_ymd_opt(1980, 3, 1).unwrap();
//!
//! let history = builder.build(born, today, &mut provider).unwrap();
//! assert!(!history.is_empty());
//! ```

pub mod record;
pub mod history;
pub mod retiree;
pub mod error;

pub use record::{CoveragePhase, EligibilityRecord, EligibilityType, GRACE_PERIOD_DAYS};
pub use history::{
    exit_condition, EligibilityHistory, EligibilityHistoryBuilder, HistoryAccumulator,
    HistoryTermination, StepOutcome, StopReason,
};
pub use retiree::{RetireeRecordDeriver, RETIREE_MIN_COVERAGE_YEARS};
pub use error::EligibilityError;
