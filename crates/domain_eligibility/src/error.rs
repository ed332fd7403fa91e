//! Eligibility domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{SamplingError, TemporalError};

/// Errors that can occur while building eligibility histories
#[derive(Debug, Error)]
pub enum EligibilityError {
    #[error("Invalid input: date of birth {date_of_birth} is after {today}")]
    InvalidInput {
        date_of_birth: NaiveDate,
        today: NaiveDate,
    },

    #[error("Invalid eligibility record: {0}")]
    InvalidRecord(String),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Date error: {0}")]
    Temporal(#[from] TemporalError),
}

impl EligibilityError {
    pub fn invalid_record(message: impl Into<String>) -> Self {
        EligibilityError::InvalidRecord(message.into())
    }

    /// Returns true if the caller supplied an unusable date of birth
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EligibilityError::InvalidInput { .. })
    }
}
