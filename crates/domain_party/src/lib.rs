//! Claimant Domain
//!
//! This crate assembles synthetic insurance claimants: a named person with a
//! date of birth, an eligibility history, and claims filed against it.
//!
//! # Generation Pass
//!
//! ```text
//! date of birth -> eligibility history -> names -> claims per period
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::FixedClock;
//! use domain_party::{ClaimantFactory, GeneratorConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let config = GeneratorConfig { seed: Some(7), ..Default::default() };
//! let factory = ClaimantFactory::new(config, FixedClock(today)).unwrap();
//!
//! let claimant = factory.create(1).unwrap();
//! assert!(claimant.claims().len() >= claimant.eligibility_history().len());
//! println!("{}", claimant.to_json().unwrap());
//! ```

pub mod claimant;
pub mod factory;
pub mod config;
pub mod error;

pub use claimant::Claimant;
pub use factory::{derive_seed, ClaimantFactory};
pub use config::{GeneratorConfig, ENV_PREFIX};
pub use error::ClaimantError;
