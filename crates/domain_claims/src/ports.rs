//! Claims Domain Ports
//!
//! The claims processor reads policies and oracle observations through these
//! ports rather than holding the registries directly, so adjudication can be
//! exercised against in-memory doubles.
//!
//! ```rust,ignore
//! let processor = ClaimsProcessor::new(
//!     Arc::new(policy_registry) as Arc<dyn PolicyReader>,
//!     Arc::new(oracle_registry) as Arc<dyn OracleReader>,
//!     clock,
//!     ClaimsConfig::default(),
//! );
//! ```

use core_kernel::PolicyId;
use domain_oracle::{OracleError, OracleObservation, OracleRegistry};
use domain_policy::{Policy, PolicyError, PolicyRegistry};

/// Read access to policies
pub trait PolicyReader: Send + Sync {
    fn policy(&self, policy_id: PolicyId) -> Result<Policy, PolicyError>;
}

/// Read access to oracle observations
pub trait OracleReader: Send + Sync {
    fn observation(&self, feed: &str) -> Result<OracleObservation, OracleError>;
}

impl PolicyReader for PolicyRegistry {
    fn policy(&self, policy_id: PolicyId) -> Result<Policy, PolicyError> {
        self.get_policy(policy_id)
    }
}

impl OracleReader for OracleRegistry {
    fn observation(&self, feed: &str) -> Result<OracleObservation, OracleError> {
        self.get_oracle_data(feed)
    }
}

/// In-memory port implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::{RecordStore, Timestamp};

    /// Serves whatever policies it was seeded with
    #[derive(Debug, Default)]
    pub struct MockPolicyReader {
        policies: RecordStore<PolicyId, Policy>,
    }

    impl MockPolicyReader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_policy(self, policy: Policy) -> Self {
            self.insert(policy);
            self
        }

        /// Adds or replaces a policy after construction
        pub fn insert(&self, policy: Policy) {
            self.policies.insert(policy.id, policy);
        }
    }

    impl PolicyReader for MockPolicyReader {
        fn policy(&self, policy_id: PolicyId) -> Result<Policy, PolicyError> {
            self.policies
                .get(&policy_id)
                .ok_or(PolicyError::NotFound(policy_id))
        }
    }

    /// Serves observations that tests can change between calls
    #[derive(Debug, Default)]
    pub struct MockOracleReader {
        observations: RecordStore<String, OracleObservation>,
    }

    impl MockOracleReader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set(&self, feed: &str, value: i64, last_updated: u64) {
            self.observations.insert(
                feed.to_string(),
                OracleObservation {
                    value,
                    last_updated: Timestamp::new(last_updated),
                },
            );
        }
    }

    impl OracleReader for MockOracleReader {
        fn observation(&self, feed: &str) -> Result<OracleObservation, OracleError> {
            self.observations
                .get(&feed.to_string())
                .ok_or_else(|| OracleError::FeedNotFound(feed.to_string()))
        }
    }
}
