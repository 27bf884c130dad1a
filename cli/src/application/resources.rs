//! Typed handles for registered resources.

use anyhow::{Context, Result};
use netstack_common::{
    BucketAcl, BucketProps, InternetGatewayProps, MainRouteTableAssociationProps, ResourceTags,
    Route, RouteTableAssociationProps, RouteTableProps, SubnetProps, VpcProps,
};
use serde::Serialize;

use crate::application::output::Output;
use crate::application::ports::{ProvisioningEngine, ResourceRequest};

/// A resource as seen by callers: the engine-assigned `urn` and `id` plus the
/// properties it was declared with.
#[derive(Debug, Clone)]
pub struct Resource<P: Clone> {
    /// Logical name the resource was registered under.
    pub name: String,
    pub urn: Output<String>,
    pub id: Output<String>,
    pub props: Output<P>,
}

pub type Vpc = Resource<VpcProps>;
pub type InternetGateway = Resource<InternetGatewayProps>;
pub type Subnet = Resource<SubnetProps>;
pub type RouteTable = Resource<RouteTableProps>;
pub type RouteTableAssociation = Resource<RouteTableAssociationProps>;
pub type MainRouteTableAssociation = Resource<MainRouteTableAssociationProps>;
pub type Bucket = Resource<BucketProps>;

/// Serialize `props` into provider inputs and declare the resource.
pub(crate) fn register<P>(
    engine: &impl ProvisioningEngine,
    type_token: &'static str,
    name: String,
    props: Output<P>,
) -> Result<Resource<P>>
where
    P: Serialize + Clone + Send + Sync + 'static,
{
    tracing::debug!(type_token, name = %name, "registering resource");
    let inputs = props.try_apply(|p| {
        serde_json::to_value(&p).context("cannot serialize resource inputs")
    });
    let registered = engine
        .register_resource(ResourceRequest {
            type_token,
            name: name.clone(),
            inputs,
        })
        .with_context(|| format!("cannot register {type_token} '{name}'"))?;
    Ok(Resource {
        name,
        urn: registered.urn,
        id: registered.id,
        props,
    })
}

impl Vpc {
    #[must_use]
    pub fn cidr_block(&self) -> Output<String> {
        self.props.apply(|p| p.cidr_block)
    }

    #[must_use]
    pub fn enable_dns_hostnames(&self) -> Output<bool> {
        self.props.apply(|p| p.enable_dns_hostnames)
    }

    #[must_use]
    pub fn tags(&self) -> Output<ResourceTags> {
        self.props.apply(|p| p.tags)
    }
}

impl InternetGateway {
    #[must_use]
    pub fn vpc_id(&self) -> Output<String> {
        self.props.apply(|p| p.vpc_id)
    }

    #[must_use]
    pub fn tags(&self) -> Output<ResourceTags> {
        self.props.apply(|p| p.tags)
    }
}

impl Subnet {
    #[must_use]
    pub fn cidr_block(&self) -> Output<String> {
        self.props.apply(|p| p.cidr_block)
    }

    #[must_use]
    pub fn vpc_id(&self) -> Output<String> {
        self.props.apply(|p| p.vpc_id)
    }

    #[must_use]
    pub fn availability_zone(&self) -> Output<String> {
        self.props.apply(|p| p.availability_zone)
    }

    #[must_use]
    pub fn map_public_ip_on_launch(&self) -> Output<bool> {
        self.props.apply(|p| p.map_public_ip_on_launch)
    }

    #[must_use]
    pub fn tags(&self) -> Output<ResourceTags> {
        self.props.apply(|p| p.tags)
    }
}

impl RouteTable {
    #[must_use]
    pub fn vpc_id(&self) -> Output<String> {
        self.props.apply(|p| p.vpc_id)
    }

    #[must_use]
    pub fn routes(&self) -> Output<Vec<Route>> {
        self.props.apply(|p| p.routes)
    }

    #[must_use]
    pub fn tags(&self) -> Output<ResourceTags> {
        self.props.apply(|p| p.tags)
    }
}

impl RouteTableAssociation {
    #[must_use]
    pub fn route_table_id(&self) -> Output<String> {
        self.props.apply(|p| p.route_table_id)
    }

    #[must_use]
    pub fn subnet_id(&self) -> Output<String> {
        self.props.apply(|p| p.subnet_id)
    }
}

impl MainRouteTableAssociation {
    #[must_use]
    pub fn route_table_id(&self) -> Output<String> {
        self.props.apply(|p| p.route_table_id)
    }

    #[must_use]
    pub fn vpc_id(&self) -> Output<String> {
        self.props.apply(|p| p.vpc_id)
    }
}

impl Bucket {
    #[must_use]
    pub fn acl(&self) -> Output<BucketAcl> {
        self.props.apply(|p| p.acl)
    }

    #[must_use]
    pub fn policy(&self) -> Output<Option<String>> {
        self.props.apply(|p| p.policy)
    }
}
