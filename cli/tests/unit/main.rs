//! Unit tests for netstack CLI
//!
//! These tests use in-process engines and run fast without external I/O.

mod mocks;
mod network_helpers;
