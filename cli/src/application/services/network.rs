//! Network resource helpers.
//!
//! Each helper maps its arguments onto one provider resource and declares it
//! with the injected engine. Names and tags follow `netstack_common::naming`.

use anyhow::Result;
use netstack_common::{
    Conventions, InternetGatewayProps, MainRouteTableAssociationProps, Route,
    RouteTableAssociationProps, RouteTableProps, SubnetProps, Visibility, VpcProps,
    association_name, availability_zone, main_association_name, routes, stack_region_name,
    subnet_name, subnet_tag_name, tokens,
};

use crate::application::output::{Output, resolve_all};
use crate::application::ports::ProvisioningEngine;
use crate::application::resources::{
    InternetGateway, MainRouteTableAssociation, RouteTable, RouteTableAssociation, Subnet, Vpc,
    register,
};

/// Declare the stack's network, named `<stack> - <region>`.
///
/// Uses `conventions.default_vpc_cidr` when `cidr_block` is `None`.
///
/// # Errors
///
/// Returns an error if the region lookup fails or the engine rejects the
/// declaration.
pub async fn create_vpc(
    engine: &impl ProvisioningEngine,
    conventions: &Conventions,
    cidr_block: Option<&str>,
) -> Result<Vpc> {
    let region = engine.region().await?;
    let stack = engine.stack();
    let props = VpcProps {
        cidr_block: cidr_block
            .unwrap_or(conventions.default_vpc_cidr.as_str())
            .to_string(),
        enable_dns_hostnames: true,
        tags: conventions.tags(stack),
    };
    register(
        engine,
        tokens::VPC,
        stack_region_name(stack, &region.name),
        Output::known(props),
    )
}

/// Declare the internet gateway attached to `vpc`.
///
/// # Errors
///
/// Returns an error if the region lookup fails or the engine rejects the
/// declaration.
pub async fn create_internet_gateway(
    engine: &impl ProvisioningEngine,
    conventions: &Conventions,
    vpc: &Vpc,
) -> Result<InternetGateway> {
    let region = engine.region().await?;
    let stack = engine.stack();
    let tags = conventions.tags(stack);
    let props = vpc
        .id
        .apply(move |vpc_id| InternetGatewayProps { vpc_id, tags });
    register(
        engine,
        tokens::INTERNET_GATEWAY,
        stack_region_name(stack, &region.name),
        props,
    )
}

/// Declare a subnet of `vpc` in availability zone `<region><zone>`.
///
/// Public subnets assign public addresses on launch.
///
/// # Errors
///
/// Returns an error if the region lookup fails or the engine rejects the
/// declaration.
pub async fn create_subnet(
    engine: &impl ProvisioningEngine,
    conventions: &Conventions,
    cidr_block: &str,
    vpc: &Vpc,
    zone: &str,
    visibility: Visibility,
) -> Result<Subnet> {
    let region = engine.region().await?;
    let stack = engine.stack();
    let name = subnet_name(visibility, stack, &region.name, zone);
    let cidr_block = cidr_block.to_string();
    let availability_zone = availability_zone(&region.name, zone);
    let tags = conventions.tags(subnet_tag_name(visibility, &region.name, zone));
    let props = vpc.id.apply(move |vpc_id| SubnetProps {
        cidr_block,
        vpc_id,
        availability_zone,
        map_public_ip_on_launch: visibility.is_public(),
        tags,
    });
    register(engine, tokens::SUBNET, name, props)
}

/// Declare a route table of `vpc` whose only route sends `0.0.0.0/0` through
/// `gateway`.
///
/// # Errors
///
/// Returns an error if the region lookup fails or the engine rejects the
/// declaration.
pub async fn create_route_table(
    engine: &impl ProvisioningEngine,
    conventions: &Conventions,
    vpc: &Vpc,
    gateway: &InternetGateway,
) -> Result<RouteTable> {
    let region = engine.region().await?;
    let stack = engine.stack();
    let tags = conventions.tags(stack);
    let props = vpc
        .id
        .zip(&gateway.id)
        .apply(move |(vpc_id, gateway_id)| RouteTableProps {
            vpc_id,
            routes: vec![Route {
                cidr_block: routes::DEFAULT_ROUTE_CIDR.to_string(),
                gateway_id,
            }],
            tags,
        });
    register(
        engine,
        tokens::ROUTE_TABLE,
        stack_region_name(stack, &region.name),
        props,
    )
}

/// Associate `subnet` with `route_table`, named `<subnet urn> -> <route table urn>`.
///
/// # Errors
///
/// Returns an error if either URN fails to resolve or the engine rejects the
/// declaration.
pub async fn create_route_table_association(
    engine: &impl ProvisioningEngine,
    route_table: &RouteTable,
    subnet: &Subnet,
) -> Result<RouteTableAssociation> {
    let urns = resolve_all([subnet.urn.clone(), route_table.urn.clone()]).await?;
    let name = association_name(&urns[0], &urns[1]);
    let props = route_table
        .id
        .zip(&subnet.id)
        .apply(|(route_table_id, subnet_id)| RouteTableAssociationProps {
            route_table_id,
            subnet_id,
        });
    register(engine, tokens::ROUTE_TABLE_ASSOCIATION, name, props)
}

/// Make `route_table` the main route table of `vpc`, named
/// `<route table urn> -> main`.
///
/// # Errors
///
/// Returns an error if the route table URN fails to resolve or the engine
/// rejects the declaration.
pub async fn create_main_route_table_association(
    engine: &impl ProvisioningEngine,
    route_table: &RouteTable,
    vpc: &Vpc,
) -> Result<MainRouteTableAssociation> {
    let urns = resolve_all([route_table.urn.clone()]).await?;
    let name = main_association_name(&urns[0]);
    let props = route_table
        .id
        .zip(&vpc.id)
        .apply(|(route_table_id, vpc_id)| MainRouteTableAssociationProps {
            route_table_id,
            vpc_id,
        });
    register(engine, tokens::MAIN_ROUTE_TABLE_ASSOCIATION, name, props)
}
