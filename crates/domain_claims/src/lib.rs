//! Claims Domain
//!
//! This crate produces synthetic medical claims for a completed eligibility
//! history. Every period receives between one and four claims, each dated
//! inside the period's claim window.

pub mod claim;
pub mod generator;
pub mod error;

pub use claim::{Claim, ClaimType, DEFAULT_CLAIM_DESCRIPTION};
pub use generator::{ClaimsGenerator, ClaimsSettings};
pub use error::ClaimError;
