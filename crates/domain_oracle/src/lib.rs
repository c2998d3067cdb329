//! Oracle Registry Domain
//!
//! Tracks the latest observation for each named data feed (for example
//! `temperature`). Only identities on the allow-list may publish, and only
//! the fixed owner identity may change the allow-list. Reads are open to
//! everyone.

pub mod observation;
pub mod registry;
pub mod error;

pub use observation::OracleObservation;
pub use registry::OracleRegistry;
pub use error::OracleError;
