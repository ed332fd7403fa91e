//! Claimant domain errors
//!
//! Generation failures from the eligibility and claims crates surface here
//! unchanged, alongside configuration problems found before generation
//! starts.

use thiserror::Error;

use core_kernel::MoneyError;
use domain_claims::ClaimError;
use domain_eligibility::EligibilityError;

/// Errors that can occur while producing claimants
#[derive(Debug, Error)]
pub enum ClaimantError {
    /// Eligibility history could not be built
    #[error("Eligibility error: {0}")]
    Eligibility(#[from] EligibilityError),

    /// Claims settings were rejected
    #[error("Claims error: {0}")]
    Claims(#[from] ClaimError),

    /// Configuration sources could not be read
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Claim amounts could not be totalled
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Claimant could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClaimantError {
    /// Returns true if the failure came from an unusable date of birth
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ClaimantError::Eligibility(e) if e.is_invalid_input())
    }
}
