//! `netstack policy`: print the public-read policy for a bucket.

use anyhow::Result;
use clap::Args;
use netstack_common::s3_web_policy;
use std::process::ExitCode;

use crate::app::AppContext;

/// Arguments for `netstack policy`.
#[derive(Args)]
pub struct PolicyArgs {
    /// Bucket the policy grants anonymous read on
    pub bucket: String,
}

/// Run the policy command.
pub fn run(app: &AppContext, args: &PolicyArgs) -> Result<ExitCode> {
    let policy = s3_web_policy(&args.bucket)?;
    app.renderer().render_policy(&policy)?;
    Ok(ExitCode::SUCCESS)
}
