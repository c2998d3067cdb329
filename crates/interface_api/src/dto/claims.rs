//! Claims DTOs

use serde::{Deserialize, Serialize};

use domain_claims::{Claim, ClaimStatus};

#[derive(Debug, Deserialize)]
pub struct FileClaimRequest {
    pub policy_id: u64,
}

#[derive(Debug, Serialize)]
pub struct ClaimFiledResponse {
    pub claim_id: u64,
}

#[derive(Debug, Serialize)]
pub struct ProcessClaimResponse {
    pub claim_id: u64,
    pub approved: bool,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: u64,
    pub policy_id: u64,
    pub claimant: String,
    pub amount: u64,
    pub status: ClaimStatus,
    pub processed_at: u64,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.value(),
            policy_id: claim.policy_id.value(),
            claimant: claim.claimant.to_string(),
            amount: claim.amount,
            status: claim.status,
            processed_at: claim.processed_at.value(),
        }
    }
}
