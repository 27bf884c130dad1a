//! JSON output helpers.

use anyhow::{Context, Result};
use netstack_common::WebPolicy;
use serde::Serialize;

use crate::domain::config::StackConfig;
use crate::domain::plan::Plan;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

fn print_pretty(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Renders domain types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render a plan document.
    pub fn render_plan(&self, plan: &Plan) -> Result<()> {
        print_pretty(plan)
    }

    /// Render a bucket policy document.
    pub fn render_policy(&self, policy: &WebPolicy) -> Result<()> {
        print_pretty(policy)
    }

    /// Render the resolved stack file and its location.
    pub fn render_config(&self, config: &StackConfig, path: &std::path::Path) -> Result<()> {
        print_pretty(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "version": version }))
    }
}
