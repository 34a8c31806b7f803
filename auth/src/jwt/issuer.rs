use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Longest accepted token lifetime, in days.
pub const MAX_LIFETIME_DAYS: i64 = 366;

/// Issues and verifies bearer tokens with a fixed lifetime.
///
/// The signing secret and lifetime are set once at construction and never
/// change afterwards; share the issuer behind an `Arc`.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

/// A freshly signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Identity asserted by a token that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub subject: String,
    pub role: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Create an issuer reading time from the system clock.
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    /// * `InvalidLifetime` - Lifetime is shorter than one second or longer
    ///   than [`MAX_LIFETIME_DAYS`]
    pub fn new(secret: &[u8], lifetime: Duration) -> Result<Self, JwtError> {
        if lifetime.num_seconds() < 1 || lifetime > Duration::days(MAX_LIFETIME_DAYS) {
            return Err(JwtError::InvalidLifetime);
        }

        Ok(Self {
            jwt_handler: JwtHandler::new(secret)?,
            lifetime,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Sign a token binding `subject` to `role`.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString, role: &str) -> Result<IssuedToken, JwtError> {
        let issued_at = self.clock.now();
        let claims = Claims::for_subject(subject, role, issued_at, self.lifetime)?;
        let token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            token,
            issued_at: from_timestamp(claims.iat)?,
            expires_at: from_timestamp(claims.exp)?,
        })
    }

    /// Verify signature and expiry, returning the asserted identity.
    ///
    /// # Errors
    /// * `MalformedToken` - Token cannot be parsed
    /// * `InvalidSignature` - Signature does not match
    /// * `TokenExpired` - Current time is at or past `exp`
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(VerifiedToken {
            issued_at: from_timestamp(claims.iat)?,
            expires_at: from_timestamp(claims.exp)?,
            subject: claims.sub,
            role: claims.role,
        })
    }
}

fn from_timestamp(seconds: i64) -> Result<DateTime<Utc>, JwtError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| JwtError::MalformedToken(format!("timestamp out of range: {}", seconds)))
}
