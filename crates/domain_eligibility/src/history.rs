//! Eligibility history generation
//!
//! A history is grown one coverage period at a time from the date of birth
//! forward. Each step draws a start date, optionally an employment start,
//! and a tenure; it then applies the termination as of today and decides
//! whether another period may follow.
//!
//! # Step termination
//!
//! ```text
//! record still open              -> Stop(ActiveRecord)
//! retiree coverage derived       -> Stop(RetireeAppended)
//! ended less than a year ago     -> Stop(RecentTermination)
//! otherwise                      -> Continue
//! ```
//!
//! The number of steps is also capped by a sampled record count (1, 2 or 3).

use std::ops::ControlFlow;

use chrono::NaiveDate;
use tracing::debug;

use core_kernel::temporal::{shift_days, shift_years, DAYS_PER_YEAR};
use core_kernel::{FakeDataProvider, WeightedSampler};
use crate::error::EligibilityError;
use crate::record::EligibilityRecord;
use crate::retiree::RetireeRecordDeriver;

/// Candidate caps on the number of generated periods
pub const RECORD_COUNT_VALUES: [u32; 3] = [1, 2, 3];
pub const RECORD_COUNT_WEIGHTS: [f64; 3] = [0.35, 0.5, 0.15];

/// Candidate maximum tenures in years; 30 has no weight of its own
pub const TENURE_YEARS: [i64; 7] = [1, 2, 3, 5, 8, 15, 30];
pub const TENURE_WEIGHTS: [f64; 6] = [0.1, 0.2, 0.35, 0.2, 0.125, 0.025];

/// Share of periods that carry an employment start date
pub const EMPLOYEE_PROBABILITY: f64 = 0.4;

/// Days between employment start and eligibility start
pub const ENROLLMENT_LAG_DAYS: i64 = 7;

/// Skew toward the previous termination when placing a successor period
pub const SUCCESSOR_START_SKEW: f64 = 0.1;

/// Why a history stopped before its record cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The latest period has no effective end
    ActiveRecord,
    /// Retiree coverage closed out the history
    RetireeAppended,
    /// The latest period ended less than a year before today
    RecentTermination,
}

/// How a finished history came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryTermination {
    Stopped(StopReason),
    CapReached,
}

/// State threaded through each generation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryAccumulator {
    pub date_of_birth: NaiveDate,
    pub previous_end: Option<NaiveDate>,
    pub records: Vec<EligibilityRecord>,
}

impl HistoryAccumulator {
    pub fn new(date_of_birth: NaiveDate) -> Self {
        Self {
            date_of_birth,
            previous_end: None,
            records: Vec::new(),
        }
    }
}

/// Result of one generation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Continue(HistoryAccumulator),
    Stop(HistoryAccumulator, StopReason),
}

/// A generated history together with how generation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityHistory {
    pub records: Vec<EligibilityRecord>,
    pub record_cap: u32,
    pub termination: HistoryTermination,
}

/// Decides whether generation stops after `last` was appended
///
/// `retiree_appended` reports whether retiree coverage followed `last`.
pub fn exit_condition(
    last: &EligibilityRecord,
    retiree_appended: bool,
    today: NaiveDate,
) -> Option<StopReason> {
    let Some(end) = last.elig_term_date() else {
        return Some(StopReason::ActiveRecord);
    };
    if retiree_appended {
        return Some(StopReason::RetireeAppended);
    }
    if (today - end).num_days() < DAYS_PER_YEAR {
        return Some(StopReason::RecentTermination);
    }
    None
}

/// Builds chronological eligibility histories
#[derive(Debug, Clone)]
pub struct EligibilityHistoryBuilder {
    record_counts: WeightedSampler<u32>,
    tenures: WeightedSampler<i64>,
    retiree: RetireeRecordDeriver,
}

impl EligibilityHistoryBuilder {
    pub fn new() -> Result<Self, EligibilityError> {
        Ok(Self {
            record_counts: WeightedSampler::new(RECORD_COUNT_VALUES, &RECORD_COUNT_WEIGHTS)?,
            tenures: WeightedSampler::new(TENURE_YEARS, &TENURE_WEIGHTS)?,
            retiree: RetireeRecordDeriver::new(),
        })
    }

    /// Generates the eligibility records for someone born on `date_of_birth`
    ///
    /// # Errors
    ///
    /// Returns `EligibilityError::InvalidInput` if `date_of_birth` is after
    /// `today`.
    pub fn build<P: FakeDataProvider + ?Sized>(
        &self,
        date_of_birth: NaiveDate,
        today: NaiveDate,
        provider: &mut P,
    ) -> Result<Vec<EligibilityRecord>, EligibilityError> {
        self.build_with_outcome(date_of_birth, today, provider)
            .map(|history| history.records)
    }

    /// As [`build`](Self::build), also reporting why generation ended
    pub fn build_with_outcome<P: FakeDataProvider + ?Sized>(
        &self,
        date_of_birth: NaiveDate,
        today: NaiveDate,
        provider: &mut P,
    ) -> Result<EligibilityHistory, EligibilityError> {
        if date_of_birth > today {
            return Err(EligibilityError::InvalidInput { date_of_birth, today });
        }

        let record_cap = self.record_counts.sample(provider);

        let folded = (0..record_cap).try_fold(HistoryAccumulator::new(date_of_birth), |acc, _| {
            match self.step(acc, today, provider) {
                Ok(StepOutcome::Continue(next)) => ControlFlow::Continue(next),
                Ok(StepOutcome::Stop(next, reason)) => {
                    ControlFlow::Break(Ok((next, HistoryTermination::Stopped(reason))))
                }
                Err(e) => ControlFlow::Break(Err(e)),
            }
        });

        let (acc, termination) = match folded {
            ControlFlow::Continue(acc) => (acc, HistoryTermination::CapReached),
            ControlFlow::Break(result) => result?,
        };

        debug!(
            %date_of_birth,
            record_cap,
            records = acc.records.len(),
            ?termination,
            "Built eligibility history"
        );

        Ok(EligibilityHistory {
            records: acc.records,
            record_cap,
            termination,
        })
    }

    /// Draws one coverage period and folds it into `acc`
    pub fn step<P: FakeDataProvider + ?Sized>(
        &self,
        acc: HistoryAccumulator,
        today: NaiveDate,
        provider: &mut P,
    ) -> Result<StepOutcome, EligibilityError> {
        let elig_start = match acc.previous_end {
            Some(previous_end) => {
                provider.date_between_skewed(previous_end, today, SUCCESSOR_START_SKEW)
            }
            None => provider.date_between(acc.date_of_birth, today),
        };

        let record = if provider.unit_interval() < EMPLOYEE_PROBABILITY {
            EligibilityRecord::employee(elig_start, shift_days(elig_start, -ENROLLMENT_LAG_DAYS)?)?
        } else {
            EligibilityRecord::dependent(elig_start)
        };

        let tenure_years = self.tenures.sample(provider);
        let max_term = shift_years(elig_start, tenure_years)?;
        let term_date = provider.date_between(elig_start, max_term);
        let record = record.with_termination(term_date, today)?;

        debug!(
            %elig_start,
            %term_date,
            tenure_years,
            phase = ?record.phase(),
            "Drew eligibility period"
        );

        self.advance(acc, record, today)
    }

    /// Appends `record`, derives retiree coverage, and classifies the step
    pub fn advance(
        &self,
        mut acc: HistoryAccumulator,
        record: EligibilityRecord,
        today: NaiveDate,
    ) -> Result<StepOutcome, EligibilityError> {
        let end = record.elig_term_date();
        acc.records.push(record);

        let retiree = match end {
            Some(end) => {
                acc.previous_end = Some(end);
                self.retiree.derive(&acc.records, end, today)?
            }
            None => None,
        };
        let retiree_appended = retiree.is_some();

        let reason = acc
            .records
            .last()
            .and_then(|last| exit_condition(last, retiree_appended, today));
        acc.records.extend(retiree);

        Ok(match reason {
            Some(reason) => StepOutcome::Stop(acc, reason),
            None => StepOutcome::Continue(acc),
        })
    }
}
