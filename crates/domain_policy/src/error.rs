//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! policy registry.

use thiserror::Error;

use core_kernel::{Classify, ErrorKind, PolicyId, Principal};

/// Errors that can occur in the policy domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// No policy is stored under the identifier
    #[error("Policy not found: {0}")]
    NotFound(PolicyId),

    /// Caller is not the policyholder, or the policy is no longer active
    #[error("Caller {caller} may not cancel policy {policy_id}")]
    Unauthorized {
        policy_id: PolicyId,
        caller: Principal,
    },
}

impl PolicyError {
    /// Creates an unauthorized error
    pub fn unauthorized(policy_id: PolicyId, caller: &Principal) -> Self {
        PolicyError::Unauthorized {
            policy_id,
            caller: caller.clone(),
        }
    }
}

impl Classify for PolicyError {
    fn kind(&self) -> ErrorKind {
        match self {
            PolicyError::NotFound(_) => ErrorKind::NotFound,
            PolicyError::Unauthorized { .. } => ErrorKind::Unauthorized,
        }
    }
}
