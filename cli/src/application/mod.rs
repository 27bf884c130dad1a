//! Application layer: port traits, deferred outputs and resource helpers.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod output;
pub mod ports;
pub mod resources;
pub mod services;

pub use output::{Output, resolve_all};
pub use ports::{ConfigStore, ProvisioningEngine, RegisteredResource, ResourceRequest};
pub use resources::{
    Bucket, InternetGateway, MainRouteTableAssociation, Resource, RouteTable,
    RouteTableAssociation, Subnet, Vpc,
};
