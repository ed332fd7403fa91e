//! Retiree coverage derivation
//!
//! Once accumulated coverage reaches five years, a terminated history earns a
//! trailing retiree period. It starts the day after the last termination and
//! runs for a third of the accumulated coverage, staying open if that end
//! falls after today.

use chrono::NaiveDate;
use tracing::debug;

use core_kernel::temporal::{shift_days, DAYS_PER_YEAR};
use crate::error::EligibilityError;
use crate::record::EligibilityRecord;

/// Minimum accumulated coverage, in years, before retiree coverage applies
pub const RETIREE_MIN_COVERAGE_YEARS: i64 = 5;

/// Decides whether a history earns a retiree record
#[derive(Debug, Clone, Copy, Default)]
pub struct RetireeRecordDeriver;

impl RetireeRecordDeriver {
    pub fn new() -> Self {
        Self
    }

    /// Sum of closed coverage spans, in days
    pub fn total_coverage_days(history: &[EligibilityRecord]) -> i64 {
        history.iter().filter_map(EligibilityRecord::coverage_days).sum()
    }

    /// Derives the retiree record for `history`, if it qualifies
    ///
    /// `last_end_date` is the effective end of the most recent period.
    pub fn derive(
        &self,
        history: &[EligibilityRecord],
        last_end_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Option<EligibilityRecord>, EligibilityError> {
        let total_days = Self::total_coverage_days(history);
        if total_days < RETIREE_MIN_COVERAGE_YEARS * DAYS_PER_YEAR {
            return Ok(None);
        }

        let start = shift_days(last_end_date, 1)?;
        let end = shift_days(start, total_days / 3)?;
        let record = EligibilityRecord::retiree(start).with_termination(end, today)?;

        debug!(
            total_days,
            retiree_start = %start,
            closed = !record.is_active(),
            "Derived retiree coverage"
        );

        Ok(Some(record))
    }
}
