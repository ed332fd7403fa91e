//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claimant generator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed reference dates and ready-made records
//! - `builders`: Builder patterns for records and factories
//! - `providers`: A scripted fake data provider for exact scenarios
//! - `assertions`: Invariant checks for histories and claims
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing subscriber setup

pub mod fixtures;
pub mod builders;
pub mod providers;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use providers::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
