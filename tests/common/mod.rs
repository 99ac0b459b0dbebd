//! Common test utilities for distsplit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory with a fake build output
//! - Assertion macros: `assert_exists!`, `assert_not_exists!`, `assert_output_contains!`
//! - Fixtures: Reusable entry HTML and expected flags blocks

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
