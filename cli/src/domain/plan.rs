//! Plan document produced by the recording engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every resource a stack declared, with its inputs fully resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub project: String,
    pub stack: String,
    pub region: String,
    pub generated_at: DateTime<Utc>,
    pub resources: Vec<PlannedResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedResource {
    pub urn: String,
    #[serde(rename = "type")]
    pub type_token: String,
    pub name: String,
    pub id: String,
    pub inputs: Value,
}

impl Plan {
    /// All planned resources of one type, in registration order.
    pub fn of_type<'a>(&'a self, type_token: &'a str) -> impl Iterator<Item = &'a PlannedResource> {
        self.resources
            .iter()
            .filter(move |r| r.type_token == type_token)
    }
}
