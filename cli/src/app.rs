//! State shared by every `netstack` subcommand.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::services::config_service;
use crate::domain::config::{StackConfig, StackOverrides};
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Terminal,
    Json,
}

/// Global flags, already resolved against the environment by clap.
#[derive(Debug, Default)]
pub struct GlobalOptions {
    pub json: bool,
    pub quiet: bool,
    pub no_color: bool,
    /// `--config` / `NETSTACK_CONFIG`
    pub stack_file: Option<PathBuf>,
}

/// Handed by reference to each command's `run`.
pub struct AppContext {
    pub output: OutputContext,
    pub mode: RenderMode,
    pub stack_store: YamlConfigStore,
}

impl AppContext {
    #[must_use]
    pub fn new(options: GlobalOptions) -> Self {
        Self {
            output: OutputContext::new(options.no_color, options.quiet),
            mode: if options.json {
                RenderMode::Json
            } else {
                RenderMode::Terminal
            },
            stack_store: YamlConfigStore::new(options.stack_file),
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == RenderMode::Json
    }

    /// Renderer matching `--json`.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            RenderMode::Terminal => Renderer::Human(HumanRenderer::new(&self.output)),
            RenderMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Read the stack file and layer `overrides` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the stack file exists but cannot be read or parsed.
    pub fn load_stack(&self, overrides: StackOverrides) -> Result<StackConfig> {
        config_service::load_stack(&self.stack_store, overrides)
    }
}
