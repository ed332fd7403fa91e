//! Property-Based Test Generators
//!
//! Provides proptest strategies for inputs to the generator pipeline.

use chrono::{Days, NaiveDate};
use core_kernel::RandomFakeDataProvider;
use proptest::prelude::*;

use crate::fixtures::TemporalFixtures;

/// Strategy for generating master seeds
pub fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Strategy for generating birth dates from the fixture day itself back
/// to 100 years before it
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..=100 * 365).prop_map(|days| TemporalFixtures::today() - Days::new(days))
}

/// Strategy for generating seeded providers
pub fn provider_strategy() -> impl Strategy<Value = RandomFakeDataProvider> {
    seed_strategy().prop_map(RandomFakeDataProvider::seeded)
}

/// Strategy for generating claimant ids
pub fn claimant_id_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000
}
