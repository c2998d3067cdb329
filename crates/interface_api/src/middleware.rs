//! API middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use core_kernel::ErrorKind;

use crate::auth::{validate_token, Caller};
use crate::error::ApiError;
use crate::AppState;

/// Resolves the bearer token into a [`Caller`] request extension
///
/// Requests without a valid token never reach a registry.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    else {
        warn!(uri = %request.uri(), "Request without bearer token");
        return Err(ApiError::Unauthenticated("missing bearer token".to_string()));
    };

    let caller = validate_token(token, &state.config.jwt_secret).map_err(|e| {
        warn!(uri = %request.uri(), error = %e, "Bearer token rejected");
        ApiError::Unauthenticated(e.to_string())
    })?;

    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

/// Audit trail of protocol calls
///
/// Records who called which operation and the protocol outcome. Denials
/// (`unauthorized`, `owner-only`) are logged at warn level.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let caller = request.extensions().get::<Caller>().map(|c| c.0.clone());
    let started = Instant::now();

    let response = next.run(request).await;

    let outcome = response.extensions().get::<ErrorKind>().copied();
    let caller = caller.map_or_else(|| "anonymous".to_string(), |c| c.to_string());
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match outcome {
        Some(kind @ (ErrorKind::Unauthorized | ErrorKind::OwnerOnly)) => warn!(
            %method, %uri, %caller, status, outcome = %kind, elapsed_ms,
            "Protocol call denied"
        ),
        Some(kind) => info!(
            %method, %uri, %caller, status, outcome = %kind, elapsed_ms,
            "Protocol call failed"
        ),
        None => info!(%method, %uri, %caller, status, outcome = "ok", elapsed_ms, "Protocol call"),
    }

    response
}
