use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Name must not be blank")]
    Blank,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0} (expected one of: user, admin)")]
    Unknown(String),
}

/// Error raised by a user directory
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("An identity with email {0} already exists")]
    DuplicateIdentity(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Top-level error for registration and login
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Input validation errors (automatically converted via #[from])
    #[error("Invalid name: {0}")]
    InvalidName(#[from] DisplayNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    // Domain-level errors
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            // A concurrent registration won the unique index.
            DirectoryError::DuplicateIdentity(_) => AuthError::UserAlreadyExists,
            DirectoryError::Storage(msg) => AuthError::Storage(msg),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::EmptyPassword => AuthError::InvalidPassword(PasswordError::Empty),
            other => AuthError::Hashing(other.to_string()),
        }
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        AuthError::Signing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_identity_becomes_user_already_exists() {
        let err = AuthError::from(DirectoryError::DuplicateIdentity("ana@x.com".to_string()));
        assert_eq!(err, AuthError::UserAlreadyExists);
        assert!(!err.to_string().contains("ana@x.com"));
    }

    #[test]
    fn test_storage_error_is_preserved() {
        let err = AuthError::from(DirectoryError::Storage("connection reset".to_string()));
        assert_eq!(err, AuthError::Storage("connection reset".to_string()));
    }

    #[test]
    fn test_empty_password_from_hasher_is_validation_error() {
        let err = AuthError::from(auth::PasswordError::EmptyPassword);
        assert_eq!(err, AuthError::InvalidPassword(PasswordError::Empty));
    }
}
