//! Policy DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_policy::{Policy, PolicyTerms};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePolicyRequest {
    pub coverage_amount: u64,
    pub premium: u64,
    pub duration: u64,
    #[validate(length(min = 1, max = 64))]
    pub trigger_condition: String,
    pub trigger_value: i64,
}

impl From<CreatePolicyRequest> for PolicyTerms {
    fn from(request: CreatePolicyRequest) -> Self {
        PolicyTerms::new(
            request.coverage_amount,
            request.premium,
            request.duration,
            request.trigger_condition,
            request.trigger_value,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyCreatedResponse {
    pub policy_id: u64,
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: u64,
    pub policyholder: String,
    pub coverage_amount: u64,
    pub premium: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub trigger_condition: String,
    pub trigger_value: i64,
    pub is_active: bool,
}

impl From<Policy> for PolicyResponse {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.id.value(),
            policyholder: policy.policyholder.to_string(),
            coverage_amount: policy.coverage_amount,
            premium: policy.premium,
            start_time: policy.start_time.value(),
            end_time: policy.end_time.value(),
            trigger_condition: policy.trigger_condition,
            trigger_value: policy.trigger_value,
            is_active: policy.is_active,
        }
    }
}
