//! `netstack preview`: declare the stack against the local engine.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::topology::provision_topology;
use crate::domain::config::StackOverrides;
use crate::infra::engine::RecordingEngine;

/// Arguments for `netstack preview`.
#[derive(Args, Default)]
pub struct PreviewArgs {
    /// Stack name (overrides the stack file)
    #[arg(long, env = "NETSTACK_STACK")]
    pub stack: Option<String>,

    /// Region (overrides the stack file)
    #[arg(long, env = "NETSTACK_REGION")]
    pub region: Option<String>,

    /// Project name (overrides the stack file)
    #[arg(long, env = "NETSTACK_PROJECT")]
    pub project: Option<String>,
}

/// Run the preview command.
pub async fn run(app: &AppContext, args: PreviewArgs) -> Result<ExitCode> {
    let config = app.load_stack(StackOverrides {
        project: args.project,
        stack: args.stack,
        region: args.region,
    })?;

    let engine = RecordingEngine::from_config(&config);
    let network = provision_topology(&engine, &config).await?;
    if network.subnets.is_empty() && !app.is_json() {
        app.output.warn("no subnets declared in the stack file");
    }

    let plan = engine.plan().await?;
    app.renderer().render_plan(&plan)?;
    Ok(ExitCode::SUCCESS)
}
