//! Test utilities
//!
//! Fixtures and a failing store for unit and HTTP-level tests.
//!
//! The real `InMemoryStore` doubles as the happy-path fake, so the only
//! hand-written mock here is one whose every call fails.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
