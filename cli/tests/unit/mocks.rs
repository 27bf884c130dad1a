//! Shared engine doubles for unit tests.
//!
//! Provides engines with canned failure modes so each test file doesn't have
//! to re-define the same boilerplate.

#![allow(clippy::expect_used)]

use anyhow::Result;
use netstack_cli::application::output::Output;
use netstack_cli::application::ports::{ProvisioningEngine, RegisteredResource, ResourceRequest};
use netstack_cli::domain::error::{EngineError, OutputError};
use netstack_cli::infra::engine::RecordingEngine;
use netstack_common::Region;

pub const STACK: &str = "test-stack";
pub const REGION: &str = "test-region";
pub const PROJECT: &str = "test-project";

/// Recording engine reporting `test-stack` in `test-region`.
pub fn test_engine() -> RecordingEngine {
    RecordingEngine::new(PROJECT, STACK, REGION)
}

// ── Mock: region lookup fails ─────────────────────────────────────────────────

pub struct RegionUnavailable;

impl ProvisioningEngine for RegionUnavailable {
    fn project(&self) -> &str {
        PROJECT
    }
    fn stack(&self) -> &str {
        STACK
    }
    async fn region(&self) -> Result<Region> {
        Err(EngineError::RegionUnavailable("credentials expired".to_string()).into())
    }
    fn register_resource(&self, _: ResourceRequest) -> Result<RegisteredResource> {
        anyhow::bail!("not expected in this test")
    }
}

// ── Mock: every id is rejected ────────────────────────────────────────────────

/// Accepts every declaration but never settles an id.
pub struct RejectingIds {
    inner: RecordingEngine,
}

impl RejectingIds {
    pub fn new() -> Self {
        Self {
            inner: test_engine(),
        }
    }
}

impl ProvisioningEngine for RejectingIds {
    fn project(&self) -> &str {
        self.inner.project()
    }
    fn stack(&self) -> &str {
        self.inner.stack()
    }
    async fn region(&self) -> Result<Region> {
        self.inner.region().await
    }
    fn register_resource(&self, request: ResourceRequest) -> Result<RegisteredResource> {
        let name = request.name.clone();
        let registered = self.inner.register_resource(request)?;
        Ok(RegisteredResource {
            urn: registered.urn,
            id: Output::rejected(OutputError::Rejected(format!(
                "provider failed to create {name}"
            ))),
        })
    }
}

// ── Mock: every URN is withheld ───────────────────────────────────────────────

/// Accepts every declaration but never settles a URN.
pub struct WithholdingUrns {
    inner: RecordingEngine,
}

impl WithholdingUrns {
    pub fn new() -> Self {
        Self {
            inner: test_engine(),
        }
    }

    /// Declarations that reached the underlying engine.
    pub fn registered(&self) -> usize {
        self.inner.registered_urns().len()
    }
}

impl ProvisioningEngine for WithholdingUrns {
    fn project(&self) -> &str {
        self.inner.project()
    }
    fn stack(&self) -> &str {
        self.inner.stack()
    }
    async fn region(&self) -> Result<Region> {
        self.inner.region().await
    }
    fn register_resource(&self, request: ResourceRequest) -> Result<RegisteredResource> {
        let name = request.name.clone();
        let registered = self.inner.register_resource(request)?;
        Ok(RegisteredResource {
            urn: Output::rejected(OutputError::Rejected(format!("urn for {name} withheld"))),
            id: registered.id,
        })
    }
}
