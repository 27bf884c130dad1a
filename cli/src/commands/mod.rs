//! Command implementations

pub mod config;
pub mod policy;
pub mod preview;
pub mod version;
