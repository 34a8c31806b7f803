use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Signing secret is missing")]
    MissingSecret,

    #[error("Token lifetime must be between one second and 366 days")]
    InvalidLifetime,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    MalformedToken(String),
}
