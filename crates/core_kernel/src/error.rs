//! Error kinds shared across the protocol
//!
//! Each domain crate owns a detailed error enum. All of them collapse to one
//! of three stable kinds, and the kind strings are what callers compare on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable classification of every failure the protocol can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Caller lacks permission for a caller-scoped mutation
    Unauthorized,
    /// Allow-list administration attempted by someone other than the owner
    OwnerOnly,
    /// Referenced policy, claim or feed does not exist
    NotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::OwnerOnly => "owner-only",
            ErrorKind::NotFound => "not-found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every domain error so callers can branch on the kind
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}
