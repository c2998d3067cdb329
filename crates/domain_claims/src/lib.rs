//! Claims Processing Domain
//!
//! This crate files claims against parametric policies and adjudicates them
//! automatically: a claim is approved when the latest observation of the
//! policy's trigger feed reaches the policy's trigger value.
//!
//! # Claim Lifecycle
//!
//! ```text
//! file_claim -> Pending -> process_claim -> Approved | Rejected
//! ```
//!
//! Processing reads the policy and the oracle through the [`ports`] traits,
//! so the leaf registries can be replaced with doubles in tests.

pub mod claim;
pub mod adjudication;
pub mod ports;
pub mod processor;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use adjudication::adjudicate;
pub use ports::{PolicyReader, OracleReader};
pub use processor::{ClaimsProcessor, ClaimsConfig, DEFAULT_FIXED_PAYOUT};
pub use error::ClaimError;
