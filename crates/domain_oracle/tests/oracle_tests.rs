//! Tests for the oracle registry

use std::sync::Arc;

use core_kernel::{Classify, ErrorKind, ManualClock, Principal, Timestamp};
use domain_oracle::{OracleError, OracleObservation, OracleRegistry};
use proptest::prelude::*;
use test_utils::{feed_strategy, principal_strategy, reading_strategy};

const OWNER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const UPDATER: &str = "ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const OUTSIDER: &str = "ST3PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

fn setup() -> (Arc<ManualClock>, OracleRegistry) {
    let clock = Arc::new(ManualClock::new(100));
    let registry = OracleRegistry::new(Principal::new(OWNER), clock.clone());
    (clock, registry)
}

/// Registry in which the owner has authorized itself, as a freshly deployed feed would be
fn setup_with_owner_updater() -> (Arc<ManualClock>, OracleRegistry) {
    let (clock, registry) = setup();
    let owner = Principal::new(OWNER);
    registry.set_authorized_updater(&owner, &owner, true).unwrap();
    (clock, registry)
}

// ============================================================================
// Publishing
// ============================================================================

mod update_tests {
    use super::*;

    #[test]
    fn test_update_by_authorized_updater() {
        let (_, registry) = setup_with_owner_updater();
        registry.update_oracle_data(&Principal::new(OWNER), "temperature", 30).unwrap();

        let data = registry.get_oracle_data("temperature").unwrap();
        assert_eq!(data.value, 30);
        assert_eq!(data.last_updated, Timestamp::new(100));
    }

    #[test]
    fn test_update_by_unauthorized_updater() {
        let (_, registry) = setup_with_owner_updater();
        let err = registry
            .update_oracle_data(&Principal::new(UPDATER), "temperature", 30)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(registry.get_oracle_data("temperature").is_err());
    }

    #[test]
    fn test_update_replaces_previous_observation() {
        let (clock, registry) = setup_with_owner_updater();
        let owner = Principal::new(OWNER);
        registry.update_oracle_data(&owner, "temperature", 30).unwrap();
        clock.set(250);
        registry.update_oracle_data(&owner, "temperature", -12).unwrap();

        assert_eq!(
            registry.get_oracle_data("temperature").unwrap(),
            OracleObservation { value: -12, last_updated: Timestamp::new(250) }
        );
    }

    #[test]
    fn test_feeds_are_independent() {
        let (_, registry) = setup_with_owner_updater();
        let owner = Principal::new(OWNER);
        registry.update_oracle_data(&owner, "temperature", 40).unwrap();
        registry.update_oracle_data(&owner, "rainfall", 3).unwrap();

        assert_eq!(registry.get_oracle_data("temperature").unwrap().value, 40);
        assert_eq!(registry.get_oracle_data("rainfall").unwrap().value, 3);
    }

    #[test]
    fn test_revoked_updater_cannot_publish() {
        let (_, registry) = setup();
        let owner = Principal::new(OWNER);
        let updater = Principal::new(UPDATER);
        registry.set_authorized_updater(&owner, &updater, true).unwrap();
        registry.update_oracle_data(&updater, "temperature", 33).unwrap();

        registry.set_authorized_updater(&owner, &updater, false).unwrap();
        assert_eq!(
            registry.update_oracle_data(&updater, "temperature", 50),
            Err(OracleError::Unauthorized(updater))
        );
        assert_eq!(registry.get_oracle_data("temperature").unwrap().value, 33);
    }
}

// ============================================================================
// Allow-list administration
// ============================================================================

mod allow_list_tests {
    use super::*;

    #[test]
    fn test_set_authorized_updater() {
        let (_, registry) = setup();
        let updater = Principal::new(UPDATER);
        registry
            .set_authorized_updater(&Principal::new(OWNER), &updater, true)
            .unwrap();

        assert!(registry.is_authorized_updater(&updater));
        assert_eq!(registry.owner(), &Principal::new(OWNER));
    }

    #[test]
    fn test_set_authorized_updater_by_non_owner() {
        let (_, registry) = setup();
        let err = registry
            .set_authorized_updater(&Principal::new(UPDATER), &Principal::new(OUTSIDER), true)
            .unwrap_err();

        assert_eq!(err.kind().as_str(), "owner-only");
        assert!(!registry.is_authorized_updater(&Principal::new(OUTSIDER)));
    }

    #[test]
    fn test_only_target_entry_changes() {
        let (_, registry) = setup();
        let owner = Principal::new(OWNER);
        registry.set_authorized_updater(&owner, &Principal::new(UPDATER), true).unwrap();
        registry.set_authorized_updater(&owner, &Principal::new(OUTSIDER), true).unwrap();
        registry.set_authorized_updater(&owner, &Principal::new(OUTSIDER), false).unwrap();

        assert!(registry.is_authorized_updater(&Principal::new(UPDATER)));
        assert!(!registry.is_authorized_updater(&Principal::new(OUTSIDER)));
        assert!(!registry.is_authorized_updater(&owner));
    }
}

// ============================================================================
// Lookup
// ============================================================================

mod lookup_tests {
    use super::*;

    #[test]
    fn test_get_non_existent_oracle_data() {
        let (_, registry) = setup_with_owner_updater();
        let err = registry.get_oracle_data("humidity").unwrap_err();
        assert_eq!(err, OracleError::FeedNotFound("humidity".to_string()));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn only_allow_listed_callers_publish(
        caller_index in 0usize..3,
        authorized in prop::collection::vec(any::<bool>(), 3),
        value in any::<i64>(),
    ) {
        let (_, registry) = setup();
        let owner = Principal::new(OWNER);
        let identities = [Principal::new(OWNER), Principal::new(UPDATER), Principal::new(OUTSIDER)];
        for (identity, flag) in identities.iter().zip(&authorized) {
            registry.set_authorized_updater(&owner, identity, *flag).unwrap();
        }

        let result = registry.update_oracle_data(&identities[caller_index], "temperature", value);
        prop_assert_eq!(result.is_ok(), authorized[caller_index]);
        prop_assert_eq!(registry.get_oracle_data("temperature").is_ok(), authorized[caller_index]);
    }

    #[test]
    fn non_owner_never_administers(name in "[A-Z0-9]{8,40}", flag in any::<bool>()) {
        prop_assume!(name != OWNER);
        let (_, registry) = setup();
        let result = registry.set_authorized_updater(&Principal::new(name.as_str()), &Principal::new(UPDATER), flag);
        prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::OwnerOnly);
        prop_assert!(!registry.is_authorized_updater(&Principal::new(UPDATER)));
    }

    #[test]
    fn reads_return_latest_publish(
        updater in principal_strategy(),
        feed in feed_strategy(),
        values in prop::collection::vec(reading_strategy(), 1..10),
    ) {
        let (clock, registry) = setup();
        registry.set_authorized_updater(&Principal::new(OWNER), &updater, true).unwrap();
        for value in &values {
            clock.advance(1);
            registry.update_oracle_data(&updater, &feed, *value).unwrap();
        }

        let observation = registry.get_oracle_data(&feed).unwrap();
        prop_assert_eq!(Some(&observation.value), values.last());
        prop_assert_eq!(observation.last_updated, Timestamp::new(100 + values.len() as u64));
    }
}
