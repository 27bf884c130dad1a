//! `netstack config`: inspect the stack file.

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved stack file
    Show,
    /// Print the stack file location
    Path,
}

/// Run the config command.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => {
            let config = app.stack_store.load()?;
            let path = app.stack_store.path()?;
            app.renderer().render_config(&config, &path)?;
        }
        ConfigCommand::Path => {
            println!("{}", app.stack_store.path()?.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
