//! Common test utilities for paydesk CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and config directories plus binary runners
//! - Fixtures: reusable data file content

pub mod env;
pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
