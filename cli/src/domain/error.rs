//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use netstack_common::Visibility;
use thiserror::Error;

// ── Output errors ─────────────────────────────────────────────────────────────

/// Failure of a deferred output.
///
/// Outputs are shared between every consumer that awaits them, so the error
/// must be `Clone` and carries rendered messages rather than source errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutputError {
    #[error("{0}")]
    Rejected(String),

    #[error("output computation panicked: {0}")]
    Panicked(String),
}

impl From<anyhow::Error> for OutputError {
    fn from(err: anyhow::Error) -> Self {
        Self::Rejected(format!("{err:#}"))
    }
}

// ── Engine errors ─────────────────────────────────────────────────────────────

/// Errors raised by a provisioning engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Duplicate resource URN: {0}")]
    DuplicateUrn(String),

    #[error("Region lookup failed: {0}")]
    RegionUnavailable(String),
}

// ── Topology errors ───────────────────────────────────────────────────────────

/// Errors found while validating a stack file before provisioning.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Invalid CIDR block '{cidr}': {reason}")]
    InvalidCidr { cidr: String, reason: &'static str },

    #[error("Invalid zone '{zone}': {reason}")]
    InvalidZone { zone: String, reason: &'static str },

    #[error("Duplicate {visibility} subnet in zone '{zone}'")]
    DuplicateSubnet { visibility: Visibility, zone: String },

    #[error("Invalid bucket name '{name}': {reason}")]
    InvalidBucket { name: String, reason: &'static str },

    #[error("Duplicate bucket '{0}'")]
    DuplicateBucket(String),

    #[error("Stack name must not be empty")]
    EmptyStack,

    #[error("Region must not be empty")]
    EmptyRegion,
}
