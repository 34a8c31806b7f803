use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::AuthOutcome;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserDirectory;

/// Domain service implementation for registration and login.
///
/// Collaborators are passed in explicitly; nothing here holds mutable state.
pub struct AuthService<UD>
where
    UD: UserDirectory,
{
    directory: Arc<UD>,
    password_hasher: Arc<auth::PasswordHasher>,
    token_issuer: Arc<auth::TokenIssuer>,
}

impl<UD> AuthService<UD>
where
    UD: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User store
    /// * `password_hasher` - Hasher used for new digests and verification
    /// * `token_issuer` - Signs the token returned on success
    pub fn new(
        directory: Arc<UD>,
        password_hasher: Arc<auth::PasswordHasher>,
        token_issuer: Arc<auth::TokenIssuer>,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            token_issuer,
        }
    }

    // Argon2 is deliberately slow; keep it off the async workers.
    async fn hash_password(&self, password: Password) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.hash(password.expose()))
            .await
            .map_err(|e| AuthError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(AuthError::from)
    }

    async fn verify_password(&self, password: Password, hash: String) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.verify(password.expose(), &hash))
            .await
            .map_err(|e| AuthError::Unknown(format!("Verification task failed: {}", e)))
    }

    // Spends the same Argon2 work as a real check when no account matched.
    async fn verify_decoy(&self, password: Password) -> Result<(), AuthError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.verify_decoy(password.expose()))
            .await
            .map_err(|e| AuthError::Unknown(format!("Verification task failed: {}", e)))
    }

    fn issue_token(&self, user: &User) -> Result<AuthOutcome, AuthError> {
        let issued = self.token_issuer.issue(user.id, user.role.as_str())?;

        Ok(AuthOutcome {
            user_id: user.id,
            display_name: user.name.as_str().to_string(),
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

#[async_trait]
impl<UD> AuthServicePort for AuthService<UD>
where
    UD: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthOutcome, AuthError> {
        let role = Role::resolve(command.role.as_deref())?;

        if self.directory.find_by_email(&command.email).await?.is_some() {
            tracing::debug!(email = %command.email, "Registration rejected: email taken");
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = self
            .directory
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
                role,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        self.issue_token(&user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthOutcome, AuthError> {
        let Some(user) = self.directory.find_by_email(&command.email).await? else {
            self.verify_decoy(command.password).await?;
            tracing::warn!(email = %command.email, "Login failed");
            return Err(AuthError::InvalidCredentials);
        };

        let password_matches = self
            .verify_password(command.password, user.password_hash.clone())
            .await?;

        if !password_matches {
            tracing::warn!(email = %command.email, "Login failed");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");

        self.issue_token(&user)
    }
}
