//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, `crate::application::output`
//! and `netstack_common`, never from `crate::infra`, `crate::commands`, or
//! `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use netstack_common::Region;
use serde_json::Value;

use crate::application::output::Output;
use crate::domain::config::StackConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// A resource declaration handed to the engine.
pub struct ResourceRequest {
    /// Provider type token, e.g. `aws:ec2/vpc:Vpc`.
    pub type_token: &'static str,
    /// Logical name; unique per type within a stack.
    pub name: String,
    /// Provider inputs, settled once every dependency has an id.
    pub inputs: Output<Value>,
}

/// Identity the engine assigns to a registered resource.
pub struct RegisteredResource {
    pub urn: Output<String>,
    pub id: Output<String>,
}

// ── Engine Port ───────────────────────────────────────────────────────────────

/// The infrastructure-as-code engine the resource helpers declare against.
///
/// The engine owns dependency ordering, diffing and the provider calls; this
/// crate only describes resources to it.
#[allow(async_fn_in_trait)]
pub trait ProvisioningEngine {
    /// Project the stack belongs to.
    fn project(&self) -> &str;
    /// Name of the stack being deployed.
    fn stack(&self) -> &str;
    /// Look up the provider's configured region.
    async fn region(&self) -> Result<Region>;
    /// Declare a resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine refuses the declaration, e.g. because
    /// another resource already holds the same URN.
    fn register_resource(&self, request: ResourceRequest) -> Result<RegisteredResource>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the stack file.
pub trait ConfigStore {
    /// Load the stack file, returning defaults when it does not exist.
    fn load(&self) -> Result<StackConfig>;
    /// Location the stack file is read from.
    fn path(&self) -> Result<PathBuf>;
}
