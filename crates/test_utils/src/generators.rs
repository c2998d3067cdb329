//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating protocol inputs.

use proptest::prelude::*;

use core_kernel::Principal;
use domain_policy::PolicyTerms;

/// Strategy for chain-style principals
pub fn principal_strategy() -> impl Strategy<Value = Principal> {
    "ST[0-9A-Z]{38}".prop_map(Principal::new)
}

/// Strategy for feed names
pub fn feed_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,19}"
}

/// Strategy for readings and thresholds, including negatives
pub fn reading_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1_000i64..1_000i64,
        Just(i64::MIN),
        Just(i64::MAX),
        any::<i64>(),
    ]
}

/// Strategy for complete policy terms
pub fn policy_terms_strategy() -> impl Strategy<Value = PolicyTerms> {
    (
        1u64..1_000_000u64,
        0u64..10_000u64,
        0u64..1_000_000u64,
        feed_strategy(),
        reading_strategy(),
    )
        .prop_map(|(coverage, premium, duration, feed, trigger)| {
            PolicyTerms::new(coverage, premium, duration, feed, trigger)
        })
}
