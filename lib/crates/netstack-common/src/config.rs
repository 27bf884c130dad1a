use serde::{Deserialize, Serialize};

use crate::types::ResourceTags;

/// Value of the `CreatedBy` tag unless overridden
pub const DEFAULT_CREATED_BY: &str = "Pulumi";

/// CIDR block of a network created without an explicit one
pub const DEFAULT_VPC_CIDR: &str = "10.0.0.0/16";

/// Naming and tagging conventions threaded into every resource helper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conventions {
    /// Value of the `CreatedBy` tag (default: Pulumi)
    #[serde(default = "default_created_by")]
    pub created_by: String,

    /// Network CIDR used when none is given (default: 10.0.0.0/16)
    #[serde(default = "default_vpc_cidr")]
    pub default_vpc_cidr: String,
}

fn default_created_by() -> String {
    DEFAULT_CREATED_BY.to_string()
}

fn default_vpc_cidr() -> String {
    DEFAULT_VPC_CIDR.to_string()
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            created_by: default_created_by(),
            default_vpc_cidr: default_vpc_cidr(),
        }
    }
}

impl Conventions {
    /// Tags with the given `Name` and this convention's `CreatedBy`.
    #[must_use]
    pub fn tags(&self, name: impl Into<String>) -> ResourceTags {
        ResourceTags {
            name: name.into(),
            created_by: self.created_by.clone(),
        }
    }
}
