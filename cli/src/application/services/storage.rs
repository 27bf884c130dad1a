//! Storage bucket helper.

use anyhow::Result;
use netstack_common::{
    BucketAcl, BucketProps, PolicyError, s3_web_policy, tokens, validate_bucket_name,
};

use crate::application::output::Output;
use crate::application::ports::ProvisioningEngine;
use crate::application::resources::{Bucket, register};

/// Declare a bucket named `name` with the given canned ACL.
///
/// `public-read` buckets also carry the anonymous `s3:GetObject` policy.
///
/// # Errors
///
/// Returns an error if `name` is not a valid bucket name or the engine
/// rejects the declaration.
pub fn create_s3_bucket(
    engine: &impl ProvisioningEngine,
    name: &str,
    acl: BucketAcl,
) -> Result<Bucket> {
    validate_bucket_name(name).map_err(|reason| PolicyError::InvalidBucketName {
        name: name.to_string(),
        reason,
    })?;
    let policy = if acl.is_public() {
        Some(s3_web_policy(name)?.to_json()?)
    } else {
        None
    };
    let props = BucketProps {
        bucket: name.to_string(),
        acl,
        policy,
    };
    register(engine, tokens::BUCKET, name.to_string(), Output::known(props))
}
