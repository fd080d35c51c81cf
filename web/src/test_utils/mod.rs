//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mock SDK records every query it receives so tests can assert on
//! how many requests a page issued and with which variables.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
