//! Compose a whole stack from its stack file.
//!
//! Imports only from `crate::domain` and `crate::application`.

use anyhow::{Context, Result};
use netstack_common::Visibility;

use crate::application::ports::ProvisioningEngine;
use crate::application::resources::{
    Bucket, InternetGateway, MainRouteTableAssociation, RouteTable, RouteTableAssociation, Subnet,
    Vpc,
};
use crate::application::services::network::{
    create_internet_gateway, create_main_route_table_association, create_route_table,
    create_route_table_association, create_subnet, create_vpc,
};
use crate::application::services::storage::create_s3_bucket;
use crate::domain::config::StackConfig;
use crate::domain::topology::validate_topology;

/// Every resource declared for one stack.
#[derive(Debug)]
pub struct Network {
    pub vpc: Vpc,
    pub internet_gateway: InternetGateway,
    pub subnets: Vec<Subnet>,
    /// Route table sending `0.0.0.0/0` through the internet gateway.
    pub public_route_table: RouteTable,
    /// One association per public subnet.
    pub associations: Vec<RouteTableAssociation>,
    /// Present only when the stack has no private subnets.
    pub main_association: Option<MainRouteTableAssociation>,
    pub buckets: Vec<Bucket>,
}

/// Validate `config` and declare its network and buckets with `engine`.
///
/// Public subnets are explicitly associated with the public route table. The
/// public table becomes the network's main table only when no private subnet
/// exists; private subnets must not inherit the gateway route.
///
/// # Errors
///
/// Returns an error if validation fails or any helper fails.
pub async fn provision_topology(
    engine: &impl ProvisioningEngine,
    config: &StackConfig,
) -> Result<Network> {
    validate_topology(config).context("invalid stack file")?;
    let conventions = &config.conventions;

    tracing::info!(
        stack = engine.stack(),
        subnets = config.network.subnets.len(),
        buckets = config.buckets.len(),
        "provisioning topology"
    );

    let vpc = create_vpc(engine, conventions, Some(config.vpc_cidr())).await?;
    let internet_gateway = create_internet_gateway(engine, conventions, &vpc).await?;
    let public_route_table =
        create_route_table(engine, conventions, &vpc, &internet_gateway).await?;

    let mut subnets = Vec::with_capacity(config.network.subnets.len());
    let mut associations = Vec::new();
    for declared in &config.network.subnets {
        let visibility = Visibility::from_public(declared.public);
        let subnet = create_subnet(
            engine,
            conventions,
            &declared.cidr_block,
            &vpc,
            &declared.zone,
            visibility,
        )
        .await?;
        if visibility.is_public() {
            associations
                .push(create_route_table_association(engine, &public_route_table, &subnet).await?);
        }
        subnets.push(subnet);
    }

    let has_private = config.network.subnets.iter().any(|s| !s.public);
    let main_association = if has_private {
        tracing::debug!("private subnets present; leaving the default main route table");
        None
    } else {
        Some(create_main_route_table_association(engine, &public_route_table, &vpc).await?)
    };

    let buckets = config
        .buckets
        .iter()
        .map(|b| create_s3_bucket(engine, &b.name, b.acl))
        .collect::<Result<Vec<_>>>()?;

    Ok(Network {
        vpc,
        internet_gateway,
        subnets,
        public_route_table,
        associations,
        main_association,
        buckets,
    })
}
