//! Testing utilities for the ingress controller end-to-end suite.
//!
//! This crate provides the assertion helpers used by the suite's test cases,
//! the event model they operate on, and the collaborators that fetch events
//! and rendered VirtualServer configuration from a running cluster.

pub mod assertions;
pub mod config;
pub mod error;
pub mod events;
pub mod implementations;
pub mod kube;
pub mod mocks;
pub mod resources;

/// Re-export commonly used types for convenience
pub use mockall;

pub use config::SuiteConfig;
pub use error::TestError;
pub use events::Event;
pub use kube::{KubeApis, VsConfigSource};
pub use resources::VirtualServerSetup;
