//! Claims processor
//!
//! Files claims and adjudicates them exactly once against the bound policy's
//! trigger and the trigger feed's latest observation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use core_kernel::{ClaimId, Clock, PolicyId, Principal, RecordStore, Sequence};

use crate::adjudication::adjudicate;
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::ports::{OracleReader, PolicyReader};

/// Payout recorded on every claim unless configured otherwise
pub const DEFAULT_FIXED_PAYOUT: u64 = 1000;

/// Claims processor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClaimsConfig {
    /// Amount snapshotted onto each claim at filing
    pub fixed_payout: u64,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            fixed_payout: DEFAULT_FIXED_PAYOUT,
        }
    }
}

/// Owns claim records and the adjudication workflow
pub struct ClaimsProcessor {
    claims: RecordStore<ClaimId, Claim>,
    sequence: Sequence,
    policies: Arc<dyn PolicyReader>,
    oracle: Arc<dyn OracleReader>,
    clock: Arc<dyn Clock>,
    config: ClaimsConfig,
}

impl ClaimsProcessor {
    /// Creates a processor with no claims and the counter at 0
    pub fn new(
        policies: Arc<dyn PolicyReader>,
        oracle: Arc<dyn OracleReader>,
        clock: Arc<dyn Clock>,
        config: ClaimsConfig,
    ) -> Self {
        Self {
            claims: RecordStore::new(),
            sequence: Sequence::new(),
            policies,
            oracle,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &ClaimsConfig {
        &self.config
    }

    /// Files a pending claim against `policy_id`
    ///
    /// The policy is not looked up here. A claim against a missing or
    /// cancelled policy is accepted and only fails when processed.
    pub fn file_claim(&self, caller: &Principal, policy_id: PolicyId) -> ClaimId {
        let id = ClaimId::new(self.sequence.allocate());
        let claim = Claim::file(id, policy_id, caller.clone(), self.config.fixed_payout);
        self.claims.insert(id, claim);

        info!(claim_id = %id, policy_id = %policy_id, claimant = %caller, "Claim filed");
        id
    }

    /// Adjudicates a pending claim
    ///
    /// Any caller may trigger processing. The claim is read, checked, decided
    /// and written under its record lock, so it is decided at most once.
    ///
    /// # Returns
    ///
    /// `true` if the claim was approved, `false` if rejected
    ///
    /// # Errors
    ///
    /// - `ClaimError::Unauthorized` if the claim does not exist or is not pending
    /// - `ClaimError::Policy` if the bound policy cannot be read
    /// - `ClaimError::Oracle` if the trigger feed has no observation
    ///
    /// On error the claim is left unchanged and stays pending.
    pub fn process_claim(&self, caller: &Principal, claim_id: ClaimId) -> Result<bool, ClaimError> {
        let outcome = self
            .claims
            .update(&claim_id, |claim: &mut Claim| -> Result<ClaimStatus, ClaimError> {
                if !claim.is_pending() {
                    return Err(ClaimError::unauthorized(claim_id, caller));
                }

                let policy = self.policies.policy(claim.policy_id)?;
                let observation = self.oracle.observation(&policy.trigger_condition)?;
                let decision = adjudicate(policy.trigger_value, observation.value);

                claim.record_decision(decision, self.clock.now());

                info!(
                    claim_id = %claim_id,
                    policy_id = %policy.id,
                    feed = %policy.trigger_condition,
                    trigger_value = policy.trigger_value,
                    observed = observation.value,
                    decision = %decision,
                    processed_by = %caller,
                    "Claim adjudicated"
                );
                Ok(decision)
            })
            .unwrap_or_else(|| Err(ClaimError::unauthorized(claim_id, caller)));

        match outcome {
            Ok(decision) => Ok(decision == ClaimStatus::Approved),
            Err(e) => {
                warn!(claim_id = %claim_id, caller = %caller, error = %e, "Claim processing failed");
                Err(e)
            }
        }
    }

    /// Returns a snapshot of a claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::ClaimNotFound` if no claim has this ID
    pub fn get_claim(&self, claim_id: ClaimId) -> Result<Claim, ClaimError> {
        debug!(claim_id = %claim_id, "Reading claim");
        self.claims
            .get(&claim_id)
            .ok_or(ClaimError::ClaimNotFound(claim_id))
    }

    /// Last claim ID issued, or 0 before the first claim
    pub fn last_claim_id(&self) -> u64 {
        self.sequence.current()
    }
}
