use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::register::AuthResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref outcome| ApiSuccess::new(StatusCode::OK, outcome.into()))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    // A malformed email or empty password cannot belong to any account; report it
    // exactly like a wrong password.
    fn try_into_command(self) -> Result<LoginCommand, AuthError> {
        let email = EmailAddress::new(self.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = Password::new(self.password).map_err(|_| AuthError::InvalidCredentials)?;
        Ok(LoginCommand::new(email, password))
    }
}
