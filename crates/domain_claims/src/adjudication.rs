//! Claim adjudication rule
//!
//! Adjudication is a single exact integer comparison between the policy's
//! trigger threshold and the feed's latest observation. There is no
//! tolerance band and no smoothing across samples.

use crate::claim::ClaimStatus;

/// Decides a claim: approved iff `observed >= trigger_value`
pub fn adjudicate(trigger_value: i64, observed: i64) -> ClaimStatus {
    if observed >= trigger_value {
        ClaimStatus::Approved
    } else {
        ClaimStatus::Rejected
    }
}
