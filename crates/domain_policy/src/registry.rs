//! Policy registry
//!
//! The registry owns every policy record and the policy ID sequence. Anyone
//! may open a policy or read one; only the policyholder may cancel, and only
//! while the policy is still active.

use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::{Clock, PolicyId, Principal, RecordStore, Sequence};

use crate::error::PolicyError;
use crate::policy::{Policy, PolicyTerms};

/// Keyed store of policies plus the operations that mutate them
pub struct PolicyRegistry {
    policies: RecordStore<PolicyId, Policy>,
    sequence: Sequence,
    clock: Arc<dyn Clock>,
}

impl PolicyRegistry {
    /// Creates an empty registry with the counter at 0
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            policies: RecordStore::new(),
            sequence: Sequence::new(),
            clock,
        }
    }

    /// Opens a new policy owned by `caller`
    ///
    /// The policy window starts at the clock's current time and ends
    /// `terms.duration` later. There is no caller restriction.
    ///
    /// # Arguments
    ///
    /// * `caller` - Identity that becomes the policyholder
    /// * `terms` - Coverage, premium, duration and trigger
    ///
    /// # Returns
    ///
    /// The newly allocated policy ID. IDs start at 1 and increase by one per call.
    pub fn create_policy(&self, caller: &Principal, terms: PolicyTerms) -> PolicyId {
        let id = PolicyId::new(self.sequence.allocate());
        let policy = Policy::open(id, caller.clone(), terms, self.clock.now());

        info!(
            policy_id = %id,
            policyholder = %caller,
            trigger_condition = %policy.trigger_condition,
            trigger_value = policy.trigger_value,
            end_time = %policy.end_time,
            "Policy created"
        );

        self.policies.insert(id, policy);
        id
    }

    /// Deactivates a policy
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::Unauthorized` if the policy does not exist, the
    /// caller is not its policyholder, or it is already inactive. A second
    /// cancellation therefore fails rather than succeeding as a no-op.
    pub fn cancel_policy(&self, caller: &Principal, policy_id: PolicyId) -> Result<(), PolicyError> {
        let outcome = self
            .policies
            .update(&policy_id, |policy| {
                if !policy.can_be_cancelled_by(caller) {
                    return Err(PolicyError::unauthorized(policy_id, caller));
                }
                policy.is_active = false;
                Ok(())
            })
            .unwrap_or_else(|| Err(PolicyError::unauthorized(policy_id, caller)));

        match &outcome {
            Ok(()) => info!(policy_id = %policy_id, caller = %caller, "Policy cancelled"),
            Err(e) => warn!(policy_id = %policy_id, caller = %caller, error = %e, "Policy cancellation rejected"),
        }
        outcome
    }

    /// Returns a snapshot of a policy
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::NotFound` if no policy has this ID
    pub fn get_policy(&self, policy_id: PolicyId) -> Result<Policy, PolicyError> {
        debug!(policy_id = %policy_id, "Reading policy");
        self.policies
            .get(&policy_id)
            .ok_or(PolicyError::NotFound(policy_id))
    }

    /// Last policy ID issued, or 0 before the first policy
    pub fn last_policy_id(&self) -> u64 {
        self.sequence.current()
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ManualClock, Timestamp};

    fn registry() -> PolicyRegistry {
        PolicyRegistry::new(Arc::new(ManualClock::new(100)))
    }

    fn holder() -> Principal {
        Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }

    #[test]
    fn test_create_policy() {
        let registry = registry();
        let id = registry.create_policy(&holder(), PolicyTerms::new(1000, 50, 30, "temperature", 35));

        assert_eq!(id, PolicyId::new(1));
        let policy = registry.get_policy(id).unwrap();
        assert_eq!(policy.coverage_amount, 1000);
        assert_eq!(policy.trigger_condition, "temperature");
        assert_eq!(policy.start_time, Timestamp::new(100));
        assert_eq!(policy.end_time, Timestamp::new(130));
    }

    #[test]
    fn test_cancel_missing_policy_is_unauthorized() {
        let registry = registry();
        let err = registry.cancel_policy(&holder(), PolicyId::new(5)).unwrap_err();
        assert!(matches!(err, PolicyError::Unauthorized { .. }));
        assert_eq!(registry.policy_count(), 0);
    }
}
