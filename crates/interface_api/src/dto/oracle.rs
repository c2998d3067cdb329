//! Oracle DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_oracle::OracleObservation;

#[derive(Debug, Deserialize)]
pub struct SetUpdaterRequest {
    pub authorized: bool,
}

#[derive(Debug, Deserialize)]
pub struct PublishObservationRequest {
    pub value: i64,
}

/// Feed name taken from the request path
#[derive(Debug, Validate)]
pub struct FeedName {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ObservationResponse {
    pub feed: String,
    pub value: i64,
    pub last_updated: u64,
}

impl ObservationResponse {
    pub fn new(feed: String, observation: OracleObservation) -> Self {
        Self {
            feed,
            value: observation.value,
            last_updated: observation.last_updated.value(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdaterResponse {
    pub identity: String,
    pub authorized: bool,
}
