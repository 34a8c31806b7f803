use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod introspect;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure classification exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ValidationError,
    InvalidRole,
    UserAlreadyExists,
    InvalidCredentials,
    InvalidToken,
    InternalError,
}

impl ErrorKind {
    fn status(self) -> StatusCode {
        match self {
            ErrorKind::ValidationError | ErrorKind::InvalidRole => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::UserAlreadyExists => StatusCode::CONFLICT,
            ErrorKind::InvalidCredentials | ErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
            ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, message)
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    pub fn internal() -> Self {
        Self::new(ErrorKind::InternalError, "Internal server error")
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();

        (
            status,
            Json(ApiResponseBody::new_error(status, self.kind, self.message)),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidName(_) | AuthError::InvalidEmail(_) | AuthError::InvalidPassword(_) => {
                ApiError::validation(err.to_string())
            }
            AuthError::InvalidRole(_) => ApiError::new(ErrorKind::InvalidRole, err.to_string()),
            AuthError::UserAlreadyExists => {
                ApiError::new(ErrorKind::UserAlreadyExists, err.to_string())
            }
            AuthError::InvalidCredentials => {
                ApiError::new(ErrorKind::InvalidCredentials, err.to_string())
            }
            AuthError::Hashing(_)
            | AuthError::Signing(_)
            | AuthError::Storage(_)
            | AuthError::Unknown(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::internal()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, kind: ErrorKind, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { kind, message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub kind: ErrorKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::RoleError;

    #[test]
    fn test_business_errors_keep_their_message() {
        let err = ApiError::from(AuthError::UserAlreadyExists);
        assert_eq!(err.kind(), ErrorKind::UserAlreadyExists);
        assert_eq!(err.kind().status(), StatusCode::CONFLICT);

        let err = ApiError::from(AuthError::InvalidRole(RoleError::Unknown("root".to_string())));
        assert_eq!(err.kind(), ErrorKind::InvalidRole);
        assert_eq!(err.kind().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_infrastructure_errors_are_hidden() {
        let err = ApiError::from(AuthError::Storage("password authentication failed for user postgres".to_string()));
        assert_eq!(err, ApiError::internal());
    }
}
