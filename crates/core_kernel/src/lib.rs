//! Core Kernel - Foundational types and primitives for claimant generation
//!
//! This crate provides the building blocks shared by the generator crates:
//! - Money types with precise decimal arithmetic and currency-string formatting
//! - Day-granular date ranges and an injectable clock
//! - Weighted random sampling
//! - The fake data port and its default `rand`-backed adapter

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod sampling;
pub mod ports;
pub mod fake_data;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{Clock, DateRange, FixedClock, SystemClock, TemporalError, DAYS_PER_YEAR};
pub use identifiers::ClaimId;
pub use sampling::{weighted_sample, SamplingError, WeightedSampler};
pub use ports::FakeDataProvider;
pub use fake_data::RandomFakeDataProvider;
