//! Policy record
//!
//! A parametric policy binds a payout ceiling to a measurable trigger: the
//! name of an oracle feed and the threshold the feed must reach. Every field
//! except `is_active` is fixed at creation.

use serde::{Deserialize, Serialize};

use core_kernel::{PolicyId, Principal, Timestamp};

/// Terms supplied by the policyholder when opening a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerms {
    /// Payout ceiling
    pub coverage_amount: u64,
    /// Premium (recorded, not collected)
    pub premium: u64,
    /// Length of the validity window
    pub duration: u64,
    /// Oracle feed the trigger reads, e.g. `temperature`
    pub trigger_condition: String,
    /// Threshold the observation must reach for a claim to be approved
    pub trigger_value: i64,
}

impl PolicyTerms {
    pub fn new(
        coverage_amount: u64,
        premium: u64,
        duration: u64,
        trigger_condition: impl Into<String>,
        trigger_value: i64,
    ) -> Self {
        Self {
            coverage_amount,
            premium,
            duration,
            trigger_condition: trigger_condition.into(),
            trigger_value,
        }
    }
}

/// A stored policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    pub policyholder: Principal,
    pub coverage_amount: u64,
    pub premium: u64,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub trigger_condition: String,
    pub trigger_value: i64,
    pub is_active: bool,
}

impl Policy {
    /// Opens a policy whose window starts at `now`
    pub fn open(id: PolicyId, policyholder: Principal, terms: PolicyTerms, now: Timestamp) -> Self {
        Self {
            id,
            policyholder,
            coverage_amount: terms.coverage_amount,
            premium: terms.premium,
            start_time: now,
            end_time: now.plus(terms.duration),
            trigger_condition: terms.trigger_condition,
            trigger_value: terms.trigger_value,
            is_active: true,
        }
    }

    /// Whether `caller` may cancel this policy right now
    pub fn can_be_cancelled_by(&self, caller: &Principal) -> bool {
        self.is_active && &self.policyholder == caller
    }

    /// Informational only. Neither cancellation nor adjudication consult the window.
    pub fn is_within_window(&self, now: Timestamp) -> bool {
        self.start_time <= now && now < self.end_time
    }
}
