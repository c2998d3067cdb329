//! Custom Test Assertions
//!
//! Assertion helpers that compare failures by their stable kind string,
//! which is how external callers distinguish errors.

use std::fmt::Debug;

use core_kernel::{Classify, ErrorKind};
use domain_claims::{Claim, ClaimStatus};

/// Asserts that `result` failed with the given kind
///
/// # Panics
///
/// Panics if `result` is `Ok` or fails with a different kind
pub fn assert_error_kind<T: Debug, E: Classify + Debug>(result: Result<T, E>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", expected, value),
        Err(e) => assert_eq!(
            e.kind().as_str(),
            expected.as_str(),
            "Unexpected error kind for {:?}",
            e
        ),
    }
}

/// Asserts that a claim has been decided with `status` and carries a processing time
pub fn assert_claim_decided(claim: &Claim, status: ClaimStatus) {
    assert!(status.is_terminal(), "{} is not a decision", status);
    assert_eq!(claim.status, status, "Claim {} has unexpected status", claim.id);
    assert!(
        !claim.processed_at.is_zero(),
        "Decided claim {} has no processing time",
        claim.id
    );
}

/// Asserts that a claim is still waiting for adjudication
pub fn assert_claim_pending(claim: &Claim) {
    assert_eq!(claim.status, ClaimStatus::Pending, "Claim {} is not pending", claim.id);
    assert!(claim.processed_at.is_zero());
}
