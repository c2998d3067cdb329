//! Claim record

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, PolicyId, Principal, Timestamp};

/// Claim status
///
/// ```text
/// Pending -> Approved
///         \-> Rejected
/// ```
///
/// Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ClaimStatus::Pending)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Policy the claim is filed against (not validated at filing)
    pub policy_id: PolicyId,
    /// Identity that filed the claim
    pub claimant: Principal,
    /// Payout snapshot fixed at filing
    pub amount: u64,
    /// Status
    pub status: ClaimStatus,
    /// Zero until the claim is processed
    pub processed_at: Timestamp,
}

impl Claim {
    /// Files a new pending claim
    pub fn file(id: ClaimId, policy_id: PolicyId, claimant: Principal, amount: u64) -> Self {
        Self {
            id,
            policy_id,
            claimant,
            amount,
            status: ClaimStatus::Pending,
            processed_at: Timestamp::ZERO,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Records the adjudication outcome
    ///
    /// Callers must check [`Claim::is_pending`] first; a claim is decided once.
    pub fn record_decision(&mut self, decision: ClaimStatus, now: Timestamp) {
        debug_assert!(self.can_transition_to(decision));
        self.status = decision;
        self.processed_at = now;
    }

    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!((self.status, target), (Pending, Approved) | (Pending, Rejected))
    }
}
