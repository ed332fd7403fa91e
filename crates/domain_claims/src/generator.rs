//! Claims generation over an eligibility history

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ClaimId, Currency, FakeDataProvider, Money};
use domain_eligibility::EligibilityRecord;
use crate::claim::{Claim, DEFAULT_CLAIM_DESCRIPTION};
use crate::error::ClaimError;

/// Tunables for claim generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsSettings {
    /// Fewest claims per eligibility period
    pub min_claims_per_period: u32,
    /// Most claims per eligibility period
    pub max_claims_per_period: u32,
    /// Smallest claim amount in whole currency units
    pub min_claim_amount: u32,
    /// Largest claim amount in whole currency units
    pub max_claim_amount: u32,
    pub description: String,
    pub currency: Currency,
}

impl Default for ClaimsSettings {
    fn default() -> Self {
        Self {
            min_claims_per_period: 1,
            max_claims_per_period: 4,
            min_claim_amount: 50,
            max_claim_amount: 200,
            description: DEFAULT_CLAIM_DESCRIPTION.to_string(),
            currency: Currency::USD,
        }
    }
}

impl ClaimsSettings {
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.min_claims_per_period == 0 {
            return Err(ClaimError::InvalidSettings(
                "every period needs at least one claim".to_string(),
            ));
        }
        if self.min_claims_per_period > self.max_claims_per_period {
            return Err(ClaimError::InvalidSettings(format!(
                "claim count range {}..={} is empty",
                self.min_claims_per_period, self.max_claims_per_period
            )));
        }
        if self.min_claim_amount > self.max_claim_amount {
            return Err(ClaimError::InvalidSettings(format!(
                "claim amount range {}..={} is empty",
                self.min_claim_amount, self.max_claim_amount
            )));
        }
        Ok(())
    }
}

/// Generates claims for each period of a history
#[derive(Debug, Clone)]
pub struct ClaimsGenerator {
    settings: ClaimsSettings,
}

impl ClaimsGenerator {
    pub fn new(settings: ClaimsSettings) -> Result<Self, ClaimError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ClaimsSettings {
        &self.settings
    }

    /// Claims for every record, in history order
    pub fn generate<P: FakeDataProvider + ?Sized>(
        &self,
        history: &[EligibilityRecord],
        provider: &mut P,
    ) -> Vec<Claim> {
        let claims: Vec<Claim> = history
            .iter()
            .flat_map(|record| self.claims_for_record(record, provider))
            .collect();

        debug!(periods = history.len(), claims = claims.len(), "Generated claims");
        claims
    }

    /// Claims dated within one record's claim window
    pub fn claims_for_record<P: FakeDataProvider + ?Sized>(
        &self,
        record: &EligibilityRecord,
        provider: &mut P,
    ) -> Vec<Claim> {
        let count = provider.integer_between(
            self.settings.min_claims_per_period as i64,
            self.settings.max_claims_per_period as i64,
        );
        let window = record.claim_window();

        (0..count)
            .map(|_| {
                let claim_date = provider.date_between(window.start, window.end);
                let claim_id = ClaimId::from_uuid(provider.unique_id());
                let treating_provider = format!("{} {}", provider.first_name(), provider.last_name());
                let amount = provider.integer_between(
                    self.settings.min_claim_amount as i64,
                    self.settings.max_claim_amount as i64,
                );

                Claim::medical(
                    claim_id,
                    treating_provider,
                    self.settings.description.clone(),
                    Money::from_major(amount, self.settings.currency),
                    claim_date,
                )
            })
            .collect()
    }
}
