//! Use-case orchestration over the port traits.
//!
//! Each service module composes domain logic with port trait calls. Services
//! import only from `crate::domain` and `crate::application`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

pub mod config_service;
pub mod network;
pub mod storage;
pub mod topology;
