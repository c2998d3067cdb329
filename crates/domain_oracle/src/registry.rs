//! Oracle registry
//!
//! Owns the per-feed observations and the updater allow-list.

use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::{Clock, Principal, RecordStore};

use crate::error::OracleError;
use crate::observation::OracleObservation;

/// Allow-list gated store of feed observations
pub struct OracleRegistry {
    owner: Principal,
    observations: RecordStore<String, OracleObservation>,
    updaters: RecordStore<Principal, bool>,
    clock: Arc<dyn Clock>,
}

impl OracleRegistry {
    /// Creates an empty registry administered by `owner`
    ///
    /// The owner is not an updater until it authorizes itself.
    pub fn new(owner: Principal, clock: Arc<dyn Clock>) -> Self {
        Self {
            owner,
            observations: RecordStore::new(),
            updaters: RecordStore::new(),
            clock,
        }
    }

    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Grants or revokes publishing rights for `target`
    ///
    /// # Errors
    ///
    /// Returns `OracleError::OwnerOnly` unless `caller` is the owner
    pub fn set_authorized_updater(
        &self,
        caller: &Principal,
        target: &Principal,
        is_authorized: bool,
    ) -> Result<(), OracleError> {
        if caller != &self.owner {
            warn!(caller = %caller, target = %target, "Allow-list change rejected: not owner");
            return Err(OracleError::OwnerOnly(caller.clone()));
        }

        self.updaters.insert(target.clone(), is_authorized);
        info!(target = %target, authorized = is_authorized, "Updater authorization set");
        Ok(())
    }

    /// Absent entries count as not authorized
    pub fn is_authorized_updater(&self, identity: &Principal) -> bool {
        self.updaters.get(identity).unwrap_or(false)
    }

    /// Publishes a new observation for `feed`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `OracleError::Unauthorized` unless `caller` is on the allow-list
    pub fn update_oracle_data(
        &self,
        caller: &Principal,
        feed: &str,
        value: i64,
    ) -> Result<(), OracleError> {
        if !self.is_authorized_updater(caller) {
            warn!(caller = %caller, feed, "Oracle update rejected: caller not authorized");
            return Err(OracleError::Unauthorized(caller.clone()));
        }

        let observation = OracleObservation {
            value,
            last_updated: self.clock.now(),
        };
        self.observations.insert(feed.to_string(), observation);

        info!(
            feed,
            value,
            last_updated = %observation.last_updated,
            updater = %caller,
            "Oracle observation published"
        );
        Ok(())
    }

    /// Returns the latest observation for `feed`
    ///
    /// # Errors
    ///
    /// Returns `OracleError::FeedNotFound` if the feed was never published
    pub fn get_oracle_data(&self, feed: &str) -> Result<OracleObservation, OracleError> {
        debug!(feed, "Reading oracle feed");
        self.observations
            .get(&feed.to_string())
            .ok_or_else(|| OracleError::FeedNotFound(feed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ManualClock;

    #[test]
    fn test_owner_is_not_implicitly_authorized() {
        let owner = Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
        let registry = OracleRegistry::new(owner.clone(), Arc::new(ManualClock::new(100)));

        assert!(!registry.is_authorized_updater(&owner));
        assert_eq!(
            registry.update_oracle_data(&owner, "temperature", 30),
            Err(OracleError::Unauthorized(owner))
        );
    }
}
