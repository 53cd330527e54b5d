//! Assertion utilities for the ingress controller end-to-end suite.
//!
//! Every helper returns `Err` with a descriptive error when its expectation
//! is not met, so a test can propagate the failure with `?` or unwrap it.

mod events;
mod responses;
mod vs_conf;

// Re-export all assertion helpers for easy access
pub use events::*;
pub use responses::*;
pub use vs_conf::*;
