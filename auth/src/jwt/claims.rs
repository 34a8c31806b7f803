use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Bearer token payload.
///
/// Binds a subject to a role for a bounded time window. Timestamps are Unix
/// seconds as in RFC 7519.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Role granted to the subject
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued at `issued_at` that expire after `lifetime`.
    ///
    /// # Errors
    /// * `SigningFailed` - The expiration time is out of range
    pub fn for_subject(
        subject: impl ToString,
        role: impl ToString,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at.checked_add_signed(lifetime).ok_or_else(|| {
            JwtError::SigningFailed("expiration time is out of range".to_string())
        })?;

        Ok(Self {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// A token is expired from its `exp` second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_subject() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_subject("user123", "admin", now, Duration::hours(24)).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_for_subject_expiration_out_of_range() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let result = Claims::for_subject("user123", "user", now, Duration::days(100_000_000));

        assert!(matches!(result, Err(JwtError::SigningFailed(_))));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            role: "user".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
