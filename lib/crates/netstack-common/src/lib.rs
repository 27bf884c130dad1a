pub mod config;
pub mod naming;
pub mod policy;
pub mod types;

pub use config::Conventions;
pub use naming::{
    association_name, availability_zone, main_association_name, resource_urn, routes,
    stack_region_name, subnet_name, subnet_tag_name, tokens, validate_bucket_name,
    validate_cidr_block, validate_zone,
};
pub use policy::{PolicyError, WebPolicy, WebPolicyStatement, s3_web_policy};
pub use types::*;
