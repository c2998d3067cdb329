//! Oracle domain errors

use thiserror::Error;

use core_kernel::{Classify, ErrorKind, Principal};

/// Errors that can occur in the oracle domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("Oracle feed not found: {0}")]
    FeedNotFound(String),

    #[error("Caller {0} is not an authorized updater")]
    Unauthorized(Principal),

    #[error("Caller {0} is not the oracle owner")]
    OwnerOnly(Principal),
}

impl Classify for OracleError {
    fn kind(&self) -> ErrorKind {
        match self {
            OracleError::FeedNotFound(_) => ErrorKind::NotFound,
            OracleError::Unauthorized(_) => ErrorKind::Unauthorized,
            OracleError::OwnerOnly(_) => ErrorKind::OwnerOnly,
        }
    }
}
