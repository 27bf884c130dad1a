//! Domain types for netstack stack files.
//!
//! Pure data and functions, no I/O.

use netstack_common::{BucketAcl, Conventions};
use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_PROJECT: &str = "netstack";
pub const DEFAULT_STACK: &str = "dev";
pub const DEFAULT_REGION: &str = "us-east-1";

// ── Stack file schema ────────────────────────────────────────────────────────

/// Top-level stack file, by default `~/.netstack/stack.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StackConfig {
    /// Project name embedded in every URN.
    pub project: String,
    /// Stack name; also the `Name` tag of the network, gateway and route table.
    pub stack: String,
    /// Region reported by the local engine's region lookup.
    pub region: String,
    /// Naming and tagging conventions.
    pub conventions: Conventions,
    /// Network layout.
    pub network: NetworkConfig,
    /// Storage buckets.
    pub buckets: Vec<BucketConfig>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            stack: DEFAULT_STACK.to_string(),
            region: DEFAULT_REGION.to_string(),
            conventions: Conventions::default(),
            network: NetworkConfig::default(),
            buckets: Vec::new(),
        }
    }
}

/// Network section of a stack file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network CIDR; `conventions.default_vpc_cidr` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    pub subnets: Vec<SubnetConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubnetConfig {
    pub cidr_block: String,
    /// Availability-zone suffix appended to the region, e.g. `a`.
    pub zone: String,
    #[serde(default)]
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketConfig {
    pub name: String,
    #[serde(default)]
    pub acl: BucketAcl,
}

/// Command-line overrides layered on top of the stack file.
#[derive(Debug, Clone, Default)]
pub struct StackOverrides {
    pub project: Option<String>,
    pub stack: Option<String>,
    pub region: Option<String>,
}

impl StackConfig {
    /// Apply command-line overrides, leaving unset fields untouched.
    #[must_use]
    pub fn with_overrides(mut self, overrides: StackOverrides) -> Self {
        if let Some(project) = overrides.project {
            self.project = project;
        }
        if let Some(stack) = overrides.stack {
            self.stack = stack;
        }
        if let Some(region) = overrides.region {
            self.region = region;
        }
        self
    }

    /// CIDR block the network will be created with.
    #[must_use]
    pub fn vpc_cidr(&self) -> &str {
        self.network
            .cidr_block
            .as_deref()
            .unwrap_or(self.conventions.default_vpc_cidr.as_str())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
