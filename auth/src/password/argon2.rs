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

/// Plaintext behind the dummy digest. Its value is irrelevant, only its cost matters.
const DUMMY_PASSWORD: &str = "dummy-password-for-timing-equalization";

/// Password hashing implementation.
///
/// Argon2id with parameters pinned at construction, so every digest produced
/// here (including the dummy one) costs the same to verify.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// Precomputes the dummy digest used by [`PasswordHasher::verify_dummy`].
    ///
    /// # Errors
    /// * `HashingFailed` - The dummy digest could not be produced
    pub fn new() -> Result<Self, PasswordError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default());
        let dummy_hash = Self::digest(&argon2, DUMMY_PASSWORD)?;

        Ok(Self { argon2, dummy_hash })
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Self::digest(&self.argon2, password)
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored hash that cannot be parsed counts as a mismatch, so callers
    /// only ever see one "wrong credentials" outcome. It still pays for one
    /// verification against the dummy digest.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self.matches(password, &parsed),
            Err(e) => {
                tracing::debug!(error = %e, "Stored password hash is malformed");
                self.verify_dummy(password);
                false
            }
        }
    }

    /// Spend one verification against the dummy digest and discard the result.
    pub fn verify_dummy(&self, password: &str) {
        if let Ok(parsed) = PasswordHash::new(&self.dummy_hash) {
            let _ = self.matches(password, &parsed);
        }
    }

    fn matches(&self, password: &str, parsed: &PasswordHash<'_>) -> bool {
        self.argon2
            .verify_password(password.as_bytes(), parsed)
            .is_ok()
    }

    fn digest(argon2: &Argon2<'static>, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}
