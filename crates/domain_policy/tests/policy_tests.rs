//! Tests for the policy registry

use std::sync::Arc;

use core_kernel::{Classify, ErrorKind, ManualClock, PolicyId, Principal, Timestamp};
use domain_policy::{PolicyError, PolicyRegistry, PolicyTerms};
use proptest::prelude::*;
use test_utils::{policy_terms_strategy, principal_strategy};

const HOLDER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const STRANGER: &str = "ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

fn setup() -> (Arc<ManualClock>, PolicyRegistry) {
    let clock = Arc::new(ManualClock::new(100));
    let registry = PolicyRegistry::new(clock.clone());
    (clock, registry)
}

fn temperature_terms() -> PolicyTerms {
    PolicyTerms::new(1000, 50, 30, "temperature", 35)
}

// ============================================================================
// Creation
// ============================================================================

mod create_tests {
    use super::*;

    #[test]
    fn test_create_new_policy() {
        let (_, registry) = setup();
        let id = registry.create_policy(&Principal::new(HOLDER), temperature_terms());

        assert_eq!(id, PolicyId::new(1));
        let policy = registry.get_policy(id).unwrap();
        assert_eq!(policy.policyholder, Principal::new(HOLDER));
        assert_eq!(policy.coverage_amount, 1000);
        assert_eq!(policy.premium, 50);
        assert_eq!(policy.trigger_condition, "temperature");
        assert_eq!(policy.trigger_value, 35);
        assert!(policy.is_active);
    }

    #[test]
    fn test_window_follows_clock() {
        let (clock, registry) = setup();
        clock.set(500);
        let id = registry.create_policy(&Principal::new(HOLDER), temperature_terms());

        let policy = registry.get_policy(id).unwrap();
        assert_eq!(policy.start_time, Timestamp::new(500));
        assert_eq!(policy.end_time, Timestamp::new(530));
    }

    #[test]
    fn test_policyholder_is_caller_at_creation() {
        let (_, registry) = setup();
        let first = registry.create_policy(&Principal::new(HOLDER), temperature_terms());
        let second = registry.create_policy(&Principal::new(STRANGER), temperature_terms());

        assert_eq!(registry.get_policy(first).unwrap().policyholder.as_str(), HOLDER);
        assert_eq!(registry.get_policy(second).unwrap().policyholder.as_str(), STRANGER);
        assert_eq!(registry.last_policy_id(), 2);
    }

    #[test]
    fn test_negative_trigger_value_is_kept() {
        let (_, registry) = setup();
        let id = registry.create_policy(
            &Principal::new(HOLDER),
            PolicyTerms::new(500, 10, 90, "frost", -5),
        );
        assert_eq!(registry.get_policy(id).unwrap().trigger_value, -5);
    }
}

// ============================================================================
// Cancellation
// ============================================================================

mod cancel_tests {
    use super::*;

    #[test]
    fn test_cancel_active_policy() {
        let (_, registry) = setup();
        let holder = Principal::new(HOLDER);
        let id = registry.create_policy(&holder, temperature_terms());

        registry.cancel_policy(&holder, id).unwrap();
        assert!(!registry.get_policy(id).unwrap().is_active);
    }

    #[test]
    fn test_cancel_inactive_policy_fails() {
        let (_, registry) = setup();
        let holder = Principal::new(HOLDER);
        let id = registry.create_policy(&holder, temperature_terms());
        registry.cancel_policy(&holder, id).unwrap();

        let err = registry.cancel_policy(&holder, id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(!registry.get_policy(id).unwrap().is_active);
    }

    #[test]
    fn test_cancel_foreign_policy_fails() {
        let (_, registry) = setup();
        let id = registry.create_policy(&Principal::new(HOLDER), temperature_terms());

        let err = registry.cancel_policy(&Principal::new(STRANGER), id).unwrap_err();
        assert_eq!(
            err,
            PolicyError::Unauthorized {
                policy_id: id,
                caller: Principal::new(STRANGER),
            }
        );
        assert!(registry.get_policy(id).unwrap().is_active);
    }

    #[test]
    fn test_cancel_unknown_policy_is_unauthorized() {
        let (_, registry) = setup();
        let err = registry.cancel_policy(&Principal::new(HOLDER), PolicyId::new(999)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}

// ============================================================================
// Lookup
// ============================================================================

mod lookup_tests {
    use super::*;

    #[test]
    fn test_get_policy_details() {
        let (_, registry) = setup();
        let id = registry.create_policy(&Principal::new(HOLDER), temperature_terms());

        let policy = registry.get_policy(id).unwrap();
        assert_eq!(policy.id, id);
        assert_eq!(policy.coverage_amount, 1000);
        assert_eq!(policy.trigger_condition, "temperature");
    }

    #[test]
    fn test_get_non_existent_policy() {
        let (_, registry) = setup();
        let err = registry.get_policy(PolicyId::new(999)).unwrap_err();
        assert_eq!(err, PolicyError::NotFound(PolicyId::new(999)));
        assert_eq!(err.kind().as_str(), "not-found");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let (_, registry) = setup();
        let holder = Principal::new(HOLDER);
        let id = registry.create_policy(&holder, temperature_terms());

        let before = registry.get_policy(id).unwrap();
        registry.cancel_policy(&holder, id).unwrap();
        assert!(before.is_active);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn policy_ids_strictly_increase_from_one(count in 1usize..50) {
        let (_, registry) = setup();
        let holder = Principal::new(HOLDER);

        let ids: Vec<u64> = (0..count)
            .map(|_| registry.create_policy(&holder, temperature_terms()).value())
            .collect();

        let expected: Vec<u64> = (1..=count as u64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn cancel_succeeds_only_for_active_holder(
        holder_cancels in any::<bool>(),
        already_cancelled in any::<bool>(),
    ) {
        let (_, registry) = setup();
        let holder = Principal::new(HOLDER);
        let id = registry.create_policy(&holder, temperature_terms());
        if already_cancelled {
            registry.cancel_policy(&holder, id).unwrap();
        }

        let caller = if holder_cancels { holder.clone() } else { Principal::new(STRANGER) };
        let result = registry.cancel_policy(&caller, id);

        prop_assert_eq!(result.is_ok(), holder_cancels && !already_cancelled);
        prop_assert_eq!(
            registry.get_policy(id).unwrap().is_active,
            !(already_cancelled || holder_cancels)
        );
    }

    #[test]
    fn created_policy_reflects_terms_and_clock(
        holder in principal_strategy(),
        terms in policy_terms_strategy(),
        now in 0u64..1_000_000u64,
    ) {
        let (clock, registry) = setup();
        clock.set(now);
        let expected_end = now.saturating_add(terms.duration);
        let id = registry.create_policy(&holder, terms.clone());

        let policy = registry.get_policy(id).unwrap();
        prop_assert_eq!(&policy.policyholder, &holder);
        prop_assert_eq!(policy.start_time, Timestamp::new(now));
        prop_assert_eq!(policy.end_time, Timestamp::new(expected_end));
        prop_assert_eq!(&policy.trigger_condition, &terms.trigger_condition);
        prop_assert_eq!(policy.trigger_value, terms.trigger_value);
        prop_assert!(policy.is_active);
    }
}
