//! Generator configuration

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Currency;
use domain_claims::{ClaimsSettings, DEFAULT_CLAIM_DESCRIPTION};
use crate::error::ClaimantError;

/// Environment variable prefix, e.g. `CLAIMANT_GEN_MAX_AGE_YEARS=65`
pub const ENV_PREFIX: &str = "CLAIMANT_GEN";

/// Claimant generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Oldest claimant age in years
    #[validate(range(min = 1, max = 120))]
    pub max_age_years: u32,
    /// Fewest claims per eligibility period
    #[validate(range(min = 1))]
    pub min_claims_per_period: u32,
    /// Most claims per eligibility period
    #[validate(range(min = 1))]
    pub max_claims_per_period: u32,
    /// Smallest claim amount in dollars
    pub min_claim_amount: u32,
    /// Largest claim amount in dollars
    pub max_claim_amount: u32,
    /// Description attached to every claim
    #[validate(length(min = 1))]
    pub claim_description: String,
    /// Master seed; unset draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_age_years: 70,
            min_claims_per_period: 1,
            max_claims_per_period: 4,
            min_claim_amount: 50,
            max_claim_amount: 200,
            claim_description: DEFAULT_CLAIM_DESCRIPTION.to_string(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from `CLAIMANT_GEN_*` environment variables
    pub fn from_env() -> Result<Self, ClaimantError> {
        Self::from_environment(Self::environment())
    }

    /// Reads configuration from a prepared environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, ClaimantError> {
        let source = config::Config::builder().add_source(environment).build()?;
        Self::from_config(source)
    }

    /// `CLAIMANT_GEN_*` environment source with typed parsing
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    /// Loads a `.env` file if present, then reads the environment
    pub fn from_env_with_dotenv() -> Result<Self, ClaimantError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Deserializes and validates an already-assembled configuration
    ///
    /// Keys absent from `source` keep their defaults.
    pub fn from_config(source: config::Config) -> Result<Self, ClaimantError> {
        let config: GeneratorConfig = source.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    /// Field validation plus the cross-field range checks
    pub fn check(&self) -> Result<(), ClaimantError> {
        self.validate()?;
        self.claims_settings().validate()?;
        Ok(())
    }

    /// Claims generation settings derived from this configuration
    pub fn claims_settings(&self) -> ClaimsSettings {
        ClaimsSettings {
            min_claims_per_period: self.min_claims_per_period,
            max_claims_per_period: self.max_claims_per_period,
            min_claim_amount: self.min_claim_amount,
            max_claim_amount: self.max_claim_amount,
            description: self.claim_description.clone(),
            currency: Currency::USD,
        }
    }
}
