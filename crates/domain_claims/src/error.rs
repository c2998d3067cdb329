//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, Classify, ErrorKind, Principal};
use domain_oracle::OracleError;
use domain_policy::PolicyError;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    /// The claim is missing or no longer pending
    #[error("Claim {claim_id} cannot be processed by {caller}")]
    Unauthorized {
        claim_id: ClaimId,
        caller: Principal,
    },

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ClaimError {
    pub fn unauthorized(claim_id: ClaimId, caller: &Principal) -> Self {
        ClaimError::Unauthorized {
            claim_id,
            caller: caller.clone(),
        }
    }
}

impl Classify for ClaimError {
    fn kind(&self) -> ErrorKind {
        match self {
            ClaimError::ClaimNotFound(_) => ErrorKind::NotFound,
            ClaimError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ClaimError::Policy(e) => e.kind(),
            ClaimError::Oracle(e) => e.kind(),
        }
    }
}
