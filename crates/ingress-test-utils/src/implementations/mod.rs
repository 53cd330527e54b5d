//! Test implementations (fakes) of the suite's cluster collaborators.
//!
//! These implementations keep state between calls, which makes them better
//! suited than mocks for tests that walk through several steps.

pub mod in_memory_conf_source;

// Re-export all implementations for easy access
pub use in_memory_conf_source::*;
