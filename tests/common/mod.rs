//! Common test utilities for tprompts CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated home, project and repository directories
//! - Assertion macros: `assert_installed!`, `assert_not_installed!`
//! - Fixtures: a local prompt repository layout

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
