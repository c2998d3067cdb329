//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! protocol test suite.
//!
//! # Modules
//!
//! - `fixtures`: Well-known identities, canned policy terms, and a wired protocol
//! - `assertions`: Assertion helpers keyed on stable error kinds
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
