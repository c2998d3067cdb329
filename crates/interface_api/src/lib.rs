//! HTTP API Layer
//!
//! This crate exposes the policy registry, oracle registry and claims
//! processor over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each registry
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Stable error kinds mapped to status codes
//!
//! The bearer token subject is the caller identity passed to every
//! state-changing operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(config, Arc::new(SystemClock))?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod extract;
pub mod auth;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::{Clock, Principal};
use domain_claims::{ClaimsConfig, ClaimsProcessor};
use domain_oracle::OracleRegistry;
use domain_policy::PolicyRegistry;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::middleware::{auth_middleware, audit_middleware};
use crate::handlers::{claims, health, oracle, policy};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub policies: Arc<PolicyRegistry>,
    pub oracle: Arc<OracleRegistry>,
    pub claims: Arc<ClaimsProcessor>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the three registries around a shared clock
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` if the configured oracle owner is empty
    pub fn new(config: ApiConfig, clock: Arc<dyn Clock>) -> Result<Self, ApiError> {
        let owner: Principal = config
            .oracle_owner
            .parse()
            .map_err(|_| ApiError::BadRequest("oracle_owner must not be empty".to_string()))?;

        let policies = Arc::new(PolicyRegistry::new(clock.clone()));
        let oracle = Arc::new(OracleRegistry::new(owner, clock.clone()));
        let claims = Arc::new(ClaimsProcessor::new(
            policies.clone(),
            oracle.clone(),
            clock,
            ClaimsConfig {
                fixed_payout: config.claim_payout,
            },
        ));

        Ok(Self {
            policies,
            oracle,
            claims,
            config,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Registries and configuration shared by all handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policy_routes = Router::new()
        .route("/", post(policy::create_policy))
        .route("/:id", get(policy::get_policy))
        .route("/:id/cancel", post(policy::cancel_policy));

    let oracle_routes = Router::new()
        .route("/updaters/:identity", put(oracle::set_updater))
        .route(
            "/feeds/:feed",
            put(oracle::publish_observation).get(oracle::get_observation),
        );

    let claims_routes = Router::new()
        .route("/", post(claims::file_claim))
        .route("/:id", get(claims::get_claim))
        .route("/:id/process", post(claims::process_claim));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/policies", policy_routes)
        .nest("/oracle", oracle_routes)
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
