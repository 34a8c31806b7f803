use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Password hashing implementation.
///
/// Argon2id with a random salt per digest. The cost parameters are fixed at
/// construction; verification always uses the parameters encoded in the
/// stored digest, so raising the cost does not invalidate older hashes.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy: OnceLock<String>,
}

impl PasswordHasher {
    /// Create a hasher with the Argon2 library defaults.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            decoy: OnceLock::new(),
        }
    }

    /// Create a hasher with an explicit cost.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory size in KiB (at least 8 x `parallelism`)
    /// * `iterations` - Number of passes
    /// * `parallelism` - Degree of parallelism (lanes)
    ///
    /// # Errors
    /// * `InvalidParams` - Argon2 rejected the parameter combination
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            decoy: OnceLock::new(),
        })
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Any failure, including a hash that cannot be parsed, is a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl PasswordHasher {
    /// Run a full verification against a throwaway digest and discard the
    /// result.
    ///
    /// Lets a lookup miss cost as much as a password mismatch. The digest is
    /// created with this hasher's cost on first use.
    pub fn verify_decoy(&self, password: &str) {
        let decoy = self
            .decoy
            .get_or_init(|| self.hash(DECOY_PASSWORD).unwrap_or_default());

        let _ = self.verify(password, decoy);
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
