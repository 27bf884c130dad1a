//! Stack file use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{StackConfig, StackOverrides};

/// Load the stack file and apply command-line overrides.
pub fn load_stack(store: &impl ConfigStore, overrides: StackOverrides) -> Result<StackConfig> {
    Ok(store.load()?.with_overrides(overrides))
}
