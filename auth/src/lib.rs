//! Authentication utilities library
//!
//! Provides reusable credential infrastructure for services:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HS256 JWT)
//! - A clock abstraction for expiry checks
//!
//! Each service defines its own domain types and adapts these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let issued = issuer.issue("user123", "admin").unwrap();
//! let verified = issuer.verify(&issued.token).unwrap();
//! assert_eq!(verified.subject, "user123");
//! assert_eq!(verified.role, "admin");
//! ```

pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::MAX_LIFETIME_DAYS;
pub use jwt::TokenIssuer;
pub use jwt::VerifiedToken;
pub use password::PasswordError;
pub use password::PasswordHasher;
