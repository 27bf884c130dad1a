use std::net::Ipv4Addr;

use crate::types::Visibility;

/// Resource type tokens registered with the engine
pub mod tokens {
    /// Format: aws:ec2/vpc:Vpc
    pub const VPC: &str = "aws:ec2/vpc:Vpc";

    pub const INTERNET_GATEWAY: &str = "aws:ec2/internetGateway:InternetGateway";

    pub const SUBNET: &str = "aws:ec2/subnet:Subnet";

    pub const ROUTE_TABLE: &str = "aws:ec2/routeTable:RouteTable";

    pub const ROUTE_TABLE_ASSOCIATION: &str =
        "aws:ec2/routeTableAssociation:RouteTableAssociation";

    pub const MAIN_ROUTE_TABLE_ASSOCIATION: &str =
        "aws:ec2/mainRouteTableAssociation:MainRouteTableAssociation";

    pub const BUCKET: &str = "aws:s3/bucket:Bucket";
}

/// Routing constants
pub mod routes {
    /// Destination of the default route every public route table carries
    pub const DEFAULT_ROUTE_CIDR: &str = "0.0.0.0/0";

    /// Suffix marking a route table as the network's main table
    pub const MAIN_SUFFIX: &str = "main";
}

/// Logical name shared by the network, gateway and route table of a stack.
/// Format: {stack} - {region}
pub fn stack_region_name(stack: &str, region: &str) -> String {
    format!("{stack} - {region}")
}

/// Format: {region}{zone}, e.g. us-east-1a
pub fn availability_zone(region: &str, zone: &str) -> String {
    format!("{region}{zone}")
}

/// Format: {visibility} - {stack} - {region}{zone}
pub fn subnet_name(visibility: Visibility, stack: &str, region: &str, zone: &str) -> String {
    format!("{visibility} - {stack} - {}", availability_zone(region, zone))
}

/// Value of the subnet `Name` tag. Format: {visibility} - {region}{zone}
pub fn subnet_tag_name(visibility: Visibility, region: &str, zone: &str) -> String {
    format!("{visibility} - {}", availability_zone(region, zone))
}

/// Format: {consumer urn} -> {target urn}
pub fn association_name(consumer_urn: &str, target_urn: &str) -> String {
    format!("{consumer_urn} -> {target_urn}")
}

/// Format: {route table urn} -> main
pub fn main_association_name(route_table_urn: &str) -> String {
    format!("{route_table_urn} -> {}", routes::MAIN_SUFFIX)
}

/// Format: urn:pulumi:{stack}::{project}::{type token}::{name}
pub fn resource_urn(stack: &str, project: &str, type_token: &str, name: &str) -> String {
    format!("urn:pulumi:{stack}::{project}::{type_token}::{name}")
}

/// Validate an IPv4 CIDR block of the form a.b.c.d/n.
/// Returns Ok(()) if valid, Err with description if invalid.
pub fn validate_cidr_block(cidr: &str) -> Result<(), &'static str> {
    let Some((addr, prefix)) = cidr.split_once('/') else {
        return Err("CIDR block must have the form a.b.c.d/n");
    };
    if addr.parse::<Ipv4Addr>().is_err() {
        return Err("CIDR block address must be a dotted IPv4 address");
    }
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err("CIDR block prefix length must be a decimal number");
    }
    if prefix.len() > 1 && prefix.starts_with('0') {
        return Err("CIDR block prefix length must not have leading zeros");
    }
    match prefix.parse::<u8>() {
        Ok(n) if n <= 32 => Ok(()),
        _ => Err("CIDR block prefix length must be between 0 and 32"),
    }
}

/// Validate an availability-zone suffix such as `a` or `b`.
pub fn validate_zone(zone: &str) -> Result<(), &'static str> {
    if zone.is_empty() {
        return Err("zone suffix must not be empty");
    }
    if !zone
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err("zone suffix must be lowercase alphanumeric [a-z0-9]");
    }
    Ok(())
}

/// Validate a bucket name against the S3 naming rules.
/// Returns Ok(()) if valid, Err with description if invalid.
pub fn validate_bucket_name(name: &str) -> Result<(), &'static str> {
    if !(3..=63).contains(&name.len()) {
        return Err("bucket name must be between 3 and 63 characters");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err("bucket name may only contain [a-z0-9.-]");
    }
    let starts_ok = name.starts_with(|c: char| c.is_ascii_alphanumeric());
    let ends_ok = name.ends_with(|c: char| c.is_ascii_alphanumeric());
    if !starts_ok || !ends_ok {
        return Err("bucket name must start and end with a letter or digit");
    }
    if name.contains("..") {
        return Err("bucket name must not contain consecutive dots");
    }
    if name.parse::<Ipv4Addr>().is_ok() {
        return Err("bucket name must not be formatted as an IP address");
    }
    Ok(())
}
