//! Claim value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Money};

/// Description attached to every generated claim
pub const DEFAULT_CLAIM_DESCRIPTION: &str = "physical therapy";

/// Line of business a claim is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Medical,
}

/// A claim filed during one eligibility period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    /// Unique identifier
    pub claim_id: ClaimId,
    /// Treating provider's name
    pub provider: String,
    /// Service description
    pub description: String,
    /// Billed amount, serialized as e.g. `"$137.00"`
    #[serde(with = "core_kernel::money::currency_string")]
    pub claim_amount: Money,
    /// Date of service
    pub claim_date: NaiveDate,
}

impl Claim {
    /// Creates a medical claim
    pub fn medical(
        claim_id: ClaimId,
        provider: impl Into<String>,
        description: impl Into<String>,
        claim_amount: Money,
        claim_date: NaiveDate,
    ) -> Self {
        Self {
            claim_type: ClaimType::Medical,
            claim_id,
            provider: provider.into(),
            description: description.into(),
            claim_amount,
            claim_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use uuid::Uuid;

    #[test]
    fn test_json_shape() {
        let claim = Claim::medical(
            ClaimId::from_uuid(Uuid::nil()),
            "Ada Lovelace",
            DEFAULT_CLAIM_DESCRIPTION,
            Money::from_major(137, Currency::USD),
            NaiveDate::from_ymd_opt(2023, 8, 9).unwrap(),
        );

        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "medical",
                "claim_id": "00000000-0000-0000-0000-000000000000",
                "provider": "Ada Lovelace",
                "description": "physical therapy",
                "claim_amount": "$137.00",
                "claim_date": "2023-08-09"
            })
        );

        let back: Claim = serde_json::from_value(json).unwrap();
        assert_eq!(back, claim);
    }
}
