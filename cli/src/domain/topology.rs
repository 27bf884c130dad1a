//! Stack file validation run before anything is registered with an engine.

use std::collections::HashSet;

use netstack_common::{Visibility, validate_bucket_name, validate_cidr_block, validate_zone};

use crate::domain::config::StackConfig;
use crate::domain::error::TopologyError;

fn check_cidr(cidr: &str) -> Result<(), TopologyError> {
    validate_cidr_block(cidr).map_err(|reason| TopologyError::InvalidCidr {
        cidr: cidr.to_string(),
        reason,
    })
}

/// Validate a stack file.
///
/// Subnet logical names are `<visibility> - <stack> - <region><zone>`, so two
/// subnets sharing visibility and zone would collide and are rejected.
///
/// # Errors
///
/// Returns the first problem found.
pub fn validate_topology(config: &StackConfig) -> Result<(), TopologyError> {
    if config.stack.trim().is_empty() {
        return Err(TopologyError::EmptyStack);
    }
    if config.region.trim().is_empty() {
        return Err(TopologyError::EmptyRegion);
    }

    check_cidr(config.vpc_cidr())?;

    let mut seen_subnets = HashSet::new();
    for subnet in &config.network.subnets {
        check_cidr(&subnet.cidr_block)?;
        validate_zone(&subnet.zone).map_err(|reason| TopologyError::InvalidZone {
            zone: subnet.zone.clone(),
            reason,
        })?;
        let visibility = Visibility::from_public(subnet.public);
        if !seen_subnets.insert((visibility, subnet.zone.as_str())) {
            return Err(TopologyError::DuplicateSubnet {
                visibility,
                zone: subnet.zone.clone(),
            });
        }
    }

    let mut seen_buckets = HashSet::new();
    for bucket in &config.buckets {
        validate_bucket_name(&bucket.name).map_err(|reason| TopologyError::InvalidBucket {
            name: bucket.name.clone(),
            reason,
        })?;
        if !seen_buckets.insert(bucket.name.as_str()) {
            return Err(TopologyError::DuplicateBucket(bucket.name.clone()));
        }
    }

    Ok(())
}
