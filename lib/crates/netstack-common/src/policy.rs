use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::naming::validate_bucket_name;

pub const POLICY_VERSION: &str = "2012-10-17";
pub const PUBLIC_READ_SID: &str = "PublicReadGetObject";
pub const GET_OBJECT_ACTION: &str = "s3:GetObject";

/// Bucket access policy document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WebPolicy {
    pub version: String,
    pub statement: Vec<WebPolicyStatement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WebPolicyStatement {
    pub sid: String,
    pub effect: String,
    pub principal: String,
    pub action: Vec<String>,
    pub resource: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: &'static str },

    #[error("cannot serialize bucket policy: {0}")]
    Serialize(String),
}

/// ARN matching every object in the bucket. Format: arn:aws:s3:::{bucket}/*
pub fn bucket_objects_arn(bucket_name: &str) -> String {
    format!("arn:aws:s3:::{bucket_name}/*")
}

/// Build the policy that grants anonymous `s3:GetObject` on every key of the bucket.
pub fn s3_web_policy(bucket_name: &str) -> Result<WebPolicy, PolicyError> {
    validate_bucket_name(bucket_name).map_err(|reason| PolicyError::InvalidBucketName {
        name: bucket_name.to_string(),
        reason,
    })?;

    Ok(WebPolicy {
        version: POLICY_VERSION.to_string(),
        statement: vec![WebPolicyStatement {
            sid: PUBLIC_READ_SID.to_string(),
            effect: "Allow".to_string(),
            principal: "*".to_string(),
            action: vec![GET_OBJECT_ACTION.to_string()],
            resource: vec![bucket_objects_arn(bucket_name)],
        }],
    })
}

impl WebPolicy {
    /// Compact JSON, the form the provider expects in a bucket's `policy` input.
    pub fn to_json(&self) -> Result<String, PolicyError> {
        serde_json::to_string(self).map_err(|e| PolicyError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, PolicyError> {
        serde_json::to_string_pretty(self).map_err(|e| PolicyError::Serialize(e.to_string()))
    }
}
