//! Claimant aggregate
//!
//! A claimant is produced in one generation pass and never changes
//! afterwards, so its fields are read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};
use domain_claims::Claim;
use domain_eligibility::{EligibilityRecord, EligibilityType};
use crate::error::ClaimantError;

/// A synthetic person with coverage history and claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claimant {
    id: i64,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    eligibility_history: Vec<EligibilityRecord>,
    claims: Vec<Claim>,
}

impl Claimant {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        eligibility_history: Vec<EligibilityRecord>,
        claims: Vec<Claim>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            eligibility_history,
            claims,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the full name in "First Last" format
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn eligibility_history(&self) -> &[EligibilityRecord] {
        &self.eligibility_history
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// The most recent coverage period
    pub fn current_eligibility(&self) -> Option<&EligibilityRecord> {
        self.eligibility_history.last()
    }

    /// True if the history closes with retiree coverage
    pub fn is_retiree(&self) -> bool {
        self.current_eligibility()
            .is_some_and(|r| r.eligibility_type() == EligibilityType::Retiree)
    }

    /// Sum of all claim amounts
    ///
    /// # Errors
    ///
    /// Returns `ClaimantError::Money` if claims mix currencies.
    pub fn total_claimed(&self) -> Result<Money, ClaimantError> {
        let currency = self
            .claims
            .first()
            .map_or(Currency::USD, |c| c.claim_amount.currency());
        let total = self
            .claims
            .iter()
            .try_fold(Money::zero(currency), |acc, c| acc.checked_add(&c.claim_amount))?;
        Ok(total)
    }

    /// Renders the claimant as one JSON object
    pub fn to_json(&self) -> Result<String, ClaimantError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ClaimantError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
