use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::TokenIdentity;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that verifies the bearer token and stores the caller's
/// [`TokenIdentity`] in the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let verified = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        ApiError::invalid_token("Invalid or expired token")
    })?;

    let user_id = UserId::from_string(&verified.subject).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse user ID from token");
        ApiError::invalid_token("Invalid token format")
    })?;

    let role: Role = verified.role.parse().map_err(|e| {
        tracing::error!(error = %e, "Failed to parse role from token");
        ApiError::invalid_token("Invalid token format")
    })?;

    req.extensions_mut().insert(TokenIdentity { user_id, role });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::invalid_token("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::invalid_token("Invalid Authorization header"))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::invalid_token("Invalid Authorization header format. Expected: Bearer <token>")
    })
}
