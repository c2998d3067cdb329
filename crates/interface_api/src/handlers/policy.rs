//! Policy handlers

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::PolicyId;

use crate::auth::Caller;
use crate::extract::{ApiJson, ApiPath};
use crate::dto::policy::*;
use crate::{error::ApiError, AppState};

/// Opens a policy held by the caller
pub async fn create_policy(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    ApiJson(request): ApiJson<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<PolicyCreatedResponse>), ApiError> {
    request.validate()?;
    let policy_id = state.policies.create_policy(&caller, request.into());

    Ok((
        StatusCode::CREATED,
        Json(PolicyCreatedResponse {
            policy_id: policy_id.value(),
        }),
    ))
}

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.policies.get_policy(PolicyId::new(id))?;
    Ok(Json(policy.into()))
}

/// Cancels a policy; only its holder may do so
pub async fn cancel_policy(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    ApiPath(id): ApiPath<u64>,
) -> Result<StatusCode, ApiError> {
    state.policies.cancel_policy(&caller, PolicyId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}
