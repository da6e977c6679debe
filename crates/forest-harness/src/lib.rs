//! Test harness for the forest generator.
//!
//! Provides scene construction helpers (ground planes), node census
//! utilities over a generated forest, and assertion helpers with
//! diagnostic output. Scenario tests for the end-to-end generation
//! properties live in `tests/scenarios.rs`.

pub mod assertions;
pub mod helpers;

pub use assertions::HarnessError;
pub use helpers::ForestCensus;
