//! Policy Registry Domain
//!
//! This crate owns parametric insurance policies. A policy names an oracle
//! feed and a threshold; claims against it are adjudicated elsewhere by
//! comparing the feed's latest observation to that threshold.
//!
//! # Policy Lifecycle
//!
//! ```text
//! create_policy -> Active -> cancel_policy -> Inactive (terminal)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyRegistry, PolicyTerms};
//!
//! let registry = PolicyRegistry::new(clock);
//! let id = registry.create_policy(&caller, PolicyTerms::new(1000, 50, 30, "temperature", 35));
//! registry.cancel_policy(&caller, id)?;
//! ```

pub mod policy;
pub mod registry;
pub mod error;

pub use policy::{Policy, PolicyTerms};
pub use registry::PolicyRegistry;
pub use error::PolicyError;
