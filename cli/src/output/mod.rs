//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use netstack_common::WebPolicy;
use owo_colors::{OwoColorize as _, Style};
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::config::StackConfig;
use crate::domain::plan::Plan;

/// Terminal state shared by the human renderer.
pub struct OutputContext {
    pub styles: Styles,
    /// `--quiet`: only errors reach the terminal.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are enabled only on a TTY with neither `--no-color` nor `NO_COLOR`.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let mut styles = Styles::default();
        if is_tty && !no_color && std::env::var_os("NO_COLOR").is_none() {
            styles.colorize();
        }
        Self { styles, quiet }
    }

    fn status(&self, symbol: &str, style: Style, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", symbol.style(style));
        }
    }

    pub fn success(&self, msg: &str) {
        self.status("✓", self.styles.success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status("⚠", self.styles.warning, msg);
    }

    pub fn info(&self, msg: &str) {
        self.status("ℹ", self.styles.info, msg);
    }

    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }
}

/// Dispatches rendering to the human or JSON renderer.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render a plan document.
    pub fn render_plan(&self, plan: &Plan) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_plan(plan);
                Ok(())
            }
            Self::Json(r) => r.render_plan(plan),
        }
    }

    /// Render a bucket policy document.
    pub fn render_policy(&self, policy: &WebPolicy) -> Result<()> {
        match self {
            Self::Human(r) => r.render_policy(policy),
            Self::Json(r) => r.render_policy(policy),
        }
    }

    /// Render the resolved stack file.
    pub fn render_config(&self, config: &StackConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
