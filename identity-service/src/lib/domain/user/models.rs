use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;
use crate::user::errors::RoleError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Identifier and email never change once the directory has stored the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// User data handed to a directory for creation.
///
/// Carries no identifier: the directory assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Name shown back to the user after register and login.
///
/// Trimmed, non-blank, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid display name.
    ///
    /// # Errors
    /// * `Blank` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, DisplayNameError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(DisplayNameError::Blank)
        } else if length > Self::MAX_LENGTH {
            Err(DisplayNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validated with an RFC 5322 parser and normalized (trimmed, lower-cased),
/// so equality and directory lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let normalized = email.trim().to_lowercase();

        email_address::EmailAddress::from_str(&normalized)
            .map(|_| EmailAddress(normalized))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw password supplied by a caller.
///
/// Never persisted; `Debug` does not print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is an empty string
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Closed set of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Resolve an optional requested role.
    ///
    /// Absent or blank falls back to `user`.
    ///
    /// # Errors
    /// * `Unknown` - Role is not in the closed set
    pub fn resolve(requested: Option<&str>) -> Result<Self, RoleError> {
        match requested.map(str::trim) {
            None | Some("") => Ok(Role::default()),
            Some(role) => role.parse(),
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to register a new user with domain types
///
/// The role stays raw: resolving it is part of registration.
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password: Password,
    pub role: Option<String>,
}

impl RegisterCommand {
    pub fn new(
        name: DisplayName,
        email: EmailAddress,
        password: Password,
        role: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            role,
        }
    }
}

/// Command to log in with email and password
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Result of a successful register or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub user_id: UserId,
    pub display_name: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity read back from a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenIdentity {
    pub user_id: UserId,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("  Ana@X.com ".to_string()).unwrap();
        assert_eq!(email.as_str(), "ana@x.com");
        assert_eq!(email, EmailAddress::new("ANA@x.COM".to_string()).unwrap());
    }

    #[test]
    fn test_email_rejects_invalid_format() {
        let result = EmailAddress::new("not-an-email".to_string());
        assert!(matches!(result, Err(EmailError::InvalidFormat(_))));
    }

    #[test]
    fn test_display_name_trimmed() {
        let name = DisplayName::new("  Ana ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Ana");
    }

    #[test]
    fn test_display_name_blank() {
        assert_eq!(
            DisplayName::new("   ".to_string()),
            Err(DisplayNameError::Blank)
        );
    }

    #[test]
    fn test_display_name_too_long() {
        let result = DisplayName::new("a".repeat(101));
        assert_eq!(
            result,
            Err(DisplayNameError::TooLong {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_password_rejects_empty() {
        assert_eq!(Password::new(String::new()), Err(PasswordError::Empty));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("secret1".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("secret1"));
    }

    #[test]
    fn test_role_resolve_defaults_to_user() {
        assert_eq!(Role::resolve(None), Ok(Role::User));
        assert_eq!(Role::resolve(Some("")), Ok(Role::User));
        assert_eq!(Role::resolve(Some("  ")), Ok(Role::User));
    }

    #[test]
    fn test_role_resolve_closed_set() {
        assert_eq!(Role::resolve(Some("admin")), Ok(Role::Admin));
        assert_eq!(Role::resolve(Some("USER")), Ok(Role::User));
        assert_eq!(
            Role::resolve(Some("superadmin")),
            Err(RoleError::Unknown("superadmin".to_string()))
        );
    }

    #[test]
    fn test_user_id_round_trip_from_string() {
        let id = UserId::new();
        assert_eq!(UserId::from_string(&id.to_string()), Ok(id));
        assert!(UserId::from_string("42").is_err());
    }
}
