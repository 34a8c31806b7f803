use async_trait::async_trait;

use crate::domain::user::models::AuthOutcome;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;
use crate::user::errors::DirectoryError;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a token for them.
    ///
    /// # Arguments
    /// * `command` - Validated name, email and password, plus the raw requested role
    ///
    /// # Returns
    /// Display name and a signed token
    ///
    /// # Errors
    /// * `InvalidRole` - Requested role is not in the closed set
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Hashing` / `Signing` / `Storage` - Infrastructure failure
    async fn register(&self, command: RegisterCommand) -> Result<AuthOutcome, AuthError>;

    /// Check credentials and issue a token.
    ///
    /// # Arguments
    /// * `command` - Email and password
    ///
    /// # Returns
    /// Display name and a signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Signing` / `Storage` - Infrastructure failure
    async fn login(&self, command: LoginCommand) -> Result<AuthOutcome, AuthError>;
}

/// Durable user store keyed by normalized email.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError>;

    /// Persist a new user; the store assigns its identifier.
    ///
    /// The uniqueness check and the write are one atomic step of the store.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `Storage` - Store operation failed
    async fn create(&self, user: NewUser) -> Result<User, DirectoryError>;
}
