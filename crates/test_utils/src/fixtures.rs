//! Pre-built Test Fixtures
//!
//! Provides ready-to-use identities, policy terms and a fully wired protocol
//! instance. Values mirror the canonical temperature scenario: a policy that
//! pays out once the `temperature` feed reaches 35.

use std::sync::Arc;

use core_kernel::{Clock, ManualClock, PolicyId, Principal, Timestamp};
use domain_claims::ports::mock::{MockOracleReader, MockPolicyReader};
use domain_claims::{ClaimsConfig, ClaimsProcessor};
use domain_oracle::OracleRegistry;
use domain_policy::{Policy, PolicyRegistry, PolicyTerms};

/// Clock value every fixture starts at
pub const GENESIS_TIME: u64 = 100;

/// Fixture for caller identities
pub struct Principals;

impl Principals {
    /// Oracle owner and default sender
    pub fn owner() -> Principal {
        Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }

    /// A second identity, typically a data-feed updater
    pub fn updater() -> Principal {
        Principal::new("ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }

    /// An identity with no rights anywhere
    pub fn outsider() -> Principal {
        Principal::new("ST3PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }
}

/// Fixture for policy terms
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Coverage 1000, premium 50, 30 time units, pays when temperature >= 35
    pub fn temperature_terms() -> PolicyTerms {
        PolicyTerms::new(1000, 50, 30, "temperature", 35)
    }

    /// Same shape with a caller-chosen trigger
    pub fn terms_with_trigger(feed: &str, trigger_value: i64) -> PolicyTerms {
        PolicyTerms::new(1000, 50, 30, feed, trigger_value)
    }
}

/// All three registries wired together over one manual clock
pub struct TestProtocol {
    pub clock: Arc<ManualClock>,
    pub policies: Arc<PolicyRegistry>,
    pub oracle: Arc<OracleRegistry>,
    pub claims: ClaimsProcessor,
}

impl TestProtocol {
    /// Fresh protocol owned by [`Principals::owner`] with default claim payout
    pub fn new() -> Self {
        Self::with_config(ClaimsConfig::default())
    }

    pub fn with_config(config: ClaimsConfig) -> Self {
        let clock = Arc::new(ManualClock::new(GENESIS_TIME));
        let policies = Arc::new(PolicyRegistry::new(clock.clone()));
        let oracle = Arc::new(OracleRegistry::new(Principals::owner(), clock.clone()));
        let claims = ClaimsProcessor::new(policies.clone(), oracle.clone(), clock.clone(), config);

        Self {
            clock,
            policies,
            oracle,
            claims,
        }
    }

    /// Authorizes `updater` and publishes `value` on `feed`
    pub fn publish(&self, updater: &Principal, feed: &str, value: i64) {
        self.oracle
            .set_authorized_updater(&Principals::owner(), updater, true)
            .expect("owner can always authorize");
        self.oracle
            .update_oracle_data(updater, feed, value)
            .expect("authorized updater can publish");
    }
}

impl Default for TestProtocol {
    fn default() -> Self {
        Self::new()
    }
}

/// Claims processor over in-memory readers instead of the real registries
///
/// Lets tests stage policy states the registry would never produce on its
/// own, such as a policy whose window has already closed.
pub struct IsolatedClaims {
    pub clock: Arc<ManualClock>,
    pub policies: Arc<MockPolicyReader>,
    pub oracle: Arc<MockOracleReader>,
    pub claims: ClaimsProcessor,
}

impl IsolatedClaims {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(GENESIS_TIME));
        let policies = Arc::new(MockPolicyReader::new());
        let oracle = Arc::new(MockOracleReader::new());
        let claims = ClaimsProcessor::new(
            policies.clone(),
            oracle.clone(),
            clock.clone(),
            ClaimsConfig::default(),
        );

        Self {
            clock,
            policies,
            oracle,
            claims,
        }
    }

    /// Stages a policy held by [`Principals::owner`] that opened at `start`
    pub fn stage_policy(&self, id: u64, terms: PolicyTerms, start: u64) -> PolicyId {
        let policy_id = PolicyId::new(id);
        self.policies.insert(Policy::open(
            policy_id,
            Principals::owner(),
            terms,
            Timestamp::new(start),
        ));
        policy_id
    }

    /// Stages the latest reading of `feed` as observed now
    pub fn stage_reading(&self, feed: &str, value: i64) {
        self.oracle.set(feed, value, self.clock.now().value());
    }
}

impl Default for IsolatedClaims {
    fn default() -> Self {
        Self::new()
    }
}
