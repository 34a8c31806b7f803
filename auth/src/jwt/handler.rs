use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT encoder/decoder bound to one HMAC secret.
///
/// Generic over the claims type. Uses HS256. Expiry is not checked here:
/// callers that care about time compare `exp` against their own clock.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Check the signature of a JWT and decode its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `MalformedToken` - Token structure, header or claims cannot be parsed
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::MalformedToken(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        role: String,
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let claims = TestClaims {
            sub: "user123".to_string(),
            role: "admin".to_string(),
        };

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_new_rejects_empty_secret() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::MissingSecret)));
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let result = handler.decode::<TestClaims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::MalformedToken(_))));

        let result = handler.decode::<TestClaims>("not-a-jwt");
        assert!(matches!(result, Err(JwtError::MalformedToken(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!").unwrap();
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let claims = TestClaims {
            sub: "user123".to_string(),
            role: "admin".to_string(),
        };

        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let user_token = handler
            .encode(&TestClaims {
                sub: "user123".to_string(),
                role: "user".to_string(),
            })
            .unwrap();
        let admin_token = handler
            .encode(&TestClaims {
                sub: "user123".to_string(),
                role: "admin".to_string(),
            })
            .unwrap();

        // Splice the admin payload onto the user signature.
        let user_parts: Vec<&str> = user_token.split('.').collect();
        let admin_parts: Vec<&str> = admin_token.split('.').collect();
        let forged = format!("{}.{}.{}", user_parts[0], admin_parts[1], user_parts[2]);

        let result = handler.decode::<TestClaims>(&forged);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }
}
