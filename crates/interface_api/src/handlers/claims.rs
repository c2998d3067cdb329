//! Claims handlers

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{ClaimId, PolicyId};

use crate::auth::Caller;
use crate::extract::{ApiJson, ApiPath};
use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Files a claim against a policy
pub async fn file_claim(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    ApiJson(request): ApiJson<FileClaimRequest>,
) -> (StatusCode, Json<ClaimFiledResponse>) {
    let claim_id = state
        .claims
        .file_claim(&caller, PolicyId::new(request.policy_id));

    (
        StatusCode::CREATED,
        Json(ClaimFiledResponse {
            claim_id: claim_id.value(),
        }),
    )
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.get_claim(ClaimId::new(id))?;
    Ok(Json(claim.into()))
}

/// Adjudicates a pending claim
pub async fn process_claim(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<ProcessClaimResponse>, ApiError> {
    let approved = state.claims.process_claim(&caller, ClaimId::new(id))?;
    Ok(Json(ProcessClaimResponse {
        claim_id: id,
        approved,
    }))
}
