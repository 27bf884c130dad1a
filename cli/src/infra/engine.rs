//! Local engine implementing `ProvisioningEngine` without a cloud backend.
//!
//! Every resource is assigned its URN and a placeholder id (`<name>_id`)
//! immediately. Registrations are kept so the declared stack can be rendered
//! as a [`Plan`].

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use anyhow::Result;
use chrono::Utc;
use netstack_common::{Region, resource_urn};
use serde_json::Value;

use crate::application::output::{Output, resolve_all};
use crate::application::ports::{ProvisioningEngine, RegisteredResource, ResourceRequest};
use crate::domain::config::StackConfig;
use crate::domain::error::EngineError;
use crate::domain::plan::{Plan, PlannedResource};

struct Registration {
    urn: String,
    type_token: &'static str,
    name: String,
    id: String,
    inputs: Output<Value>,
}

#[derive(Default)]
struct Registry {
    urns: HashSet<String>,
    entries: Vec<Registration>,
}

/// Engine that records declarations instead of provisioning them.
pub struct RecordingEngine {
    project: String,
    stack: String,
    region: Region,
    registry: Mutex<Registry>,
}

impl RecordingEngine {
    pub fn new(
        project: impl Into<String>,
        stack: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            stack: stack.into(),
            region: Region {
                name: region.into(),
            },
            registry: Mutex::new(Registry::default()),
        }
    }

    #[must_use]
    pub fn from_config(config: &StackConfig) -> Self {
        Self::new(&config.project, &config.stack, &config.region)
    }

    /// URNs registered so far, in registration order.
    #[must_use]
    pub fn registered_urns(&self) -> Vec<String> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|r| r.urn.clone())
            .collect()
    }

    /// Resolve every recorded resource's inputs into a plan.
    ///
    /// # Errors
    ///
    /// Returns the first input that failed to resolve.
    pub async fn plan(&self) -> Result<Plan> {
        let (heads, inputs): (Vec<_>, Vec<_>) = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .entries
                .iter()
                .map(|r| {
                    (
                        (r.urn.clone(), r.type_token, r.name.clone(), r.id.clone()),
                        r.inputs.clone(),
                    )
                })
                .unzip()
        };

        let inputs = resolve_all(inputs).await?;
        let resources = heads
            .into_iter()
            .zip(inputs)
            .map(|((urn, type_token, name, id), inputs)| PlannedResource {
                urn,
                type_token: type_token.to_string(),
                name,
                id,
                inputs,
            })
            .collect();

        Ok(Plan {
            project: self.project.clone(),
            stack: self.stack.clone(),
            region: self.region.name.clone(),
            generated_at: Utc::now(),
            resources,
        })
    }
}

impl ProvisioningEngine for RecordingEngine {
    fn project(&self) -> &str {
        &self.project
    }

    fn stack(&self) -> &str {
        &self.stack
    }

    async fn region(&self) -> Result<Region> {
        if self.region.name.trim().is_empty() {
            return Err(EngineError::RegionUnavailable("no region configured".to_string()).into());
        }
        Ok(self.region.clone())
    }

    fn register_resource(&self, request: ResourceRequest) -> Result<RegisteredResource> {
        let urn = resource_urn(&self.stack, &self.project, request.type_token, &request.name);
        let id = format!("{}_id", request.name);

        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        if !registry.urns.insert(urn.clone()) {
            return Err(EngineError::DuplicateUrn(urn).into());
        }
        tracing::debug!(urn = %urn, "recorded resource");
        registry.entries.push(Registration {
            urn: urn.clone(),
            type_token: request.type_token,
            name: request.name,
            id: id.clone(),
            inputs: request.inputs,
        });

        Ok(RegisteredResource {
            urn: Output::known(urn),
            id: Output::known(id),
        })
    }
}
