//! Domain layer: stack configuration, topology validation, plan types and
//! typed errors.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`. All functions are
//! synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod plan;
pub mod topology;

pub use config::{BucketConfig, NetworkConfig, StackConfig, StackOverrides, SubnetConfig};
pub use error::{EngineError, OutputError, TopologyError};
pub use plan::{Plan, PlannedResource};
pub use topology::validate_topology;
