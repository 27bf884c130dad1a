//! Human-readable terminal renderer.

use anyhow::Result;
use netstack_common::{WebPolicy, tokens};
use owo_colors::OwoColorize as _;

use crate::domain::config::StackConfig;
use crate::domain::plan::{Plan, PlannedResource};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.info(&format!("netstack v{version}"));
    }

    /// Render every planned resource followed by a count.
    pub fn render_plan(&self, plan: &Plan) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&format!(
            "Plan for {}/{} ({})",
            plan.project, plan.stack, plan.region
        ));
        println!();
        for resource in &plan.resources {
            self.render_resource(resource);
        }
        println!();
        self.ctx.success(&format!(
            "{} resources declared ({} subnets, {} buckets)",
            plan.resources.len(),
            plan.of_type(tokens::SUBNET).count(),
            plan.of_type(tokens::BUCKET).count()
        ));
    }

    fn render_resource(&self, resource: &PlannedResource) {
        println!(
            "  {:<28} {}",
            short_type(&resource.type_token).style(self.ctx.styles.resource_type),
            resource.name
        );
        if let Some(cidr) = resource.inputs.get("cidrBlock").and_then(|v| v.as_str()) {
            println!("    {:<26} {cidr}", "cidr:".style(self.ctx.styles.dim));
        }
        if let Some(zone) = resource
            .inputs
            .get("availabilityZone")
            .and_then(|v| v.as_str())
        {
            println!("    {:<26} {zone}", "zone:".style(self.ctx.styles.dim));
        }
        if let Some(acl) = resource.inputs.get("acl").and_then(|v| v.as_str()) {
            println!("    {:<26} {acl}", "acl:".style(self.ctx.styles.dim));
        }
    }

    /// Render a bucket policy document.
    pub fn render_policy(&self, policy: &WebPolicy) -> Result<()> {
        println!("{}", policy.to_json_pretty()?);
        Ok(())
    }

    /// Render the resolved stack file.
    pub fn render_config(&self, config: &StackConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Stack file ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "project:", config.project);
        println!("  {:<20} {}", "stack:", config.stack);
        println!("  {:<20} {}", "region:", config.region);
        println!("  {:<20} {}", "created_by:", config.conventions.created_by);
        println!("  {:<20} {}", "network.cidr_block:", config.vpc_cidr());
        println!(
            "  {:<20} {}",
            "network.subnets:",
            config.network.subnets.len()
        );
        println!("  {:<20} {}", "buckets:", config.buckets.len());
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            "NETSTACK_CONFIG:",
            std::env::var("NETSTACK_CONFIG").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }
}

/// Trailing segment of a type token, e.g. `Vpc` for `aws:ec2/vpc:Vpc`.
#[must_use]
pub fn short_type(type_token: &str) -> &str {
    type_token.rsplit(':').next().unwrap_or(type_token)
}
