//! Core Kernel - Foundational types for the parametric insurance protocol
//!
//! This crate provides the building blocks shared by every registry:
//! - Caller identities and sequential record identifiers
//! - Protocol time and the clock port
//! - Keyed record storage with atomic read-check-write updates
//! - Stable error kinds

pub mod identifiers;
pub mod temporal;
pub mod store;
pub mod error;

pub use identifiers::{PolicyId, ClaimId, Principal, EmptyPrincipal};
pub use temporal::{Timestamp, Clock, SystemClock, ManualClock};
pub use store::{RecordStore, Sequence};
pub use error::{ErrorKind, Classify};
