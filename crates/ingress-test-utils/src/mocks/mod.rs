//! Mock implementations of the suite's cluster collaborators.
//!
//! These mocks allow the assertion helpers to be tested in isolation from a
//! running cluster.

pub mod vs_config_source;

// Re-export all mocks and their creator functions for easy access
pub use vs_config_source::*;
