//! Oracle handlers

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{EmptyPrincipal, Principal};

use crate::auth::Caller;
use crate::extract::{ApiJson, ApiPath};
use crate::dto::oracle::*;
use crate::{error::ApiError, AppState};

fn feed_name(name: String) -> Result<String, ApiError> {
    let feed = FeedName { name };
    feed.validate()?;
    Ok(feed.name)
}

/// Grants or revokes publishing rights; owner only
pub async fn set_updater(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    ApiPath(identity): ApiPath<String>,
    ApiJson(request): ApiJson<SetUpdaterRequest>,
) -> Result<Json<UpdaterResponse>, ApiError> {
    let target: Principal = identity
        .parse()
        .map_err(|e: EmptyPrincipal| ApiError::BadRequest(e.to_string()))?;

    state
        .oracle
        .set_authorized_updater(&caller, &target, request.authorized)?;

    Ok(Json(UpdaterResponse {
        identity: target.to_string(),
        authorized: request.authorized,
    }))
}

/// Publishes an observation; allow-listed updaters only
pub async fn publish_observation(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    ApiPath(feed): ApiPath<String>,
    ApiJson(request): ApiJson<PublishObservationRequest>,
) -> Result<StatusCode, ApiError> {
    let feed = feed_name(feed)?;
    state.oracle.update_oracle_data(&caller, &feed, request.value)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Latest observation of a feed
pub async fn get_observation(
    State(state): State<AppState>,
    ApiPath(feed): ApiPath<String>,
) -> Result<Json<ObservationResponse>, ApiError> {
    let feed = feed_name(feed)?;
    let observation = state.oracle.get_oracle_data(&feed)?;
    Ok(Json(ObservationResponse::new(feed, observation)))
}
