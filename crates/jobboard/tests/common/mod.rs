//! Shared test utilities for jobboard integration tests.
//!
//! - `TestHarness` opens an isolated file database with services attached
//! - `JobBuilder` assembles job payloads without repetitive boilerplate

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
