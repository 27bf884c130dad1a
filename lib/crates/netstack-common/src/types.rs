use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a subnet hands out public addresses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    #[must_use]
    pub fn from_public(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }

    #[must_use]
    pub fn is_public(self) -> bool {
        self == Self::Public
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned ACL applied to a bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BucketAcl {
    #[serde(rename = "public-read")]
    PublicRead,
    #[default]
    #[serde(rename = "private")]
    Private,
}

impl BucketAcl {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PublicRead => "public-read",
            Self::Private => "private",
        }
    }

    #[must_use]
    pub fn is_public(self) -> bool {
        self == Self::PublicRead
    }
}

impl fmt::Display for BucketAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the engine's region lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub name: String,
}

/// Tags every network resource carries.
/// Serialized with the provider's capitalised keys: `Name`, `CreatedBy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceTags {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CreatedBy")]
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VpcProps {
    pub cidr_block: String,
    pub enable_dns_hostnames: bool,
    pub tags: ResourceTags,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InternetGatewayProps {
    pub vpc_id: String,
    pub tags: ResourceTags,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetProps {
    pub cidr_block: String,
    pub vpc_id: String,
    /// Full zone name, e.g. `us-east-1a`
    pub availability_zone: String,
    pub map_public_ip_on_launch: bool,
    pub tags: ResourceTags,
}

/// A single entry in a route table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub cidr_block: String,
    pub gateway_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableProps {
    pub vpc_id: String,
    pub routes: Vec<Route>,
    pub tags: ResourceTags,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableAssociationProps {
    pub route_table_id: String,
    pub subnet_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainRouteTableAssociationProps {
    pub route_table_id: String,
    pub vpc_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BucketProps {
    pub bucket: String,
    pub acl: BucketAcl,
    /// JSON policy document, present on public-read buckets only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}
