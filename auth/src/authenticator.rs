use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Tokens issued on a successful login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Unknown identity and wrong password both end up here.
    #[error("Invalid identity or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    MissingToken,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(password_hasher: PasswordHasher, token_codec: TokenCodec) -> Self {
        Self {
            password_hasher,
            token_codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against the stored hash of a resolved user.
    ///
    /// When no user was resolved (`stored_hash` is `None`) the password is still
    /// verified against the dummy digest, so both failure paths cost one
    /// Argon2 verification.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No stored hash, or the password does not match
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        match stored_hash {
            Some(hash) if self.password_hasher.verify(password, hash) => Ok(()),
            Some(_) => Err(AuthenticationError::InvalidCredentials),
            None => {
                self.password_hasher.verify_dummy(password);
                Err(AuthenticationError::InvalidCredentials)
            }
        }
    }

    /// Issue an access token and a refresh token for an authenticated user.
    ///
    /// # Errors
    /// * `JwtError` - Token signing failed
    pub fn issue_tokens(
        &self,
        user_id: i64,
        username: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        Ok(TokenPair {
            access_token: self.token_codec.issue_access(user_id, Some(username))?,
            refresh_token: self.token_codec.issue_refresh(user_id, Some(username))?,
        })
    }

    /// Mint a new access token from a refresh token.
    ///
    /// The refresh token is not rotated and stays usable until it expires.
    ///
    /// # Errors
    /// * `MissingToken` - No refresh token was presented
    /// * `InvalidRefreshToken` - Bad signature, expired, or malformed
    /// * `JwtError` - Signing the new access token failed
    pub fn refresh_access_token(
        &self,
        refresh_token: Option<&str>,
    ) -> Result<String, AuthenticationError> {
        let refresh_token = refresh_token.ok_or(AuthenticationError::MissingToken)?;

        let claims = self.token_codec.verify_refresh(refresh_token).map_err(|e| {
            tracing::debug!(error = %e, "Refresh token rejected");
            AuthenticationError::InvalidRefreshToken
        })?;

        let access_token = self
            .token_codec
            .issue_access(claims.user_id, claims.username.as_deref())?;

        Ok(access_token)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.token_codec.verify_access(token)
    }

    pub fn token_codec(&self) -> &TokenCodec {
        &self.token_codec
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::RefreshClaims;

    fn authenticator() -> Authenticator {
        let codec = TokenCodec::new(
            b"test_access_secret_at_least_32_bytes!",
            b"test_refresh_secret_at_least_32_bytes",
            Duration::minutes(15),
            Duration::days(7),
        )
        .expect("Failed to create codec");

        Authenticator::new(PasswordHasher::new().expect("Failed to create hasher"), codec)
    }

    #[test]
    fn test_verify_credentials_success() {
        let authenticator = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        assert!(authenticator
            .verify_credentials("my_password", Some(&hash))
            .is_ok());
    }

    #[test]
    fn test_wrong_password_and_unknown_user_fail_the_same_way() {
        let authenticator = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let wrong = authenticator
            .verify_credentials("wrong_password", Some(&hash))
            .unwrap_err();
        let unknown = authenticator
            .verify_credentials("my_password", None)
            .unwrap_err();

        assert!(matches!(wrong, AuthenticationError::InvalidCredentials));
        assert!(matches!(unknown, AuthenticationError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn test_issue_tokens_and_validate() {
        let authenticator = authenticator();

        let tokens = authenticator
            .issue_tokens(5, "alice")
            .expect("Failed to issue tokens");

        let claims = authenticator
            .validate_token(&tokens.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.user_id, 5);
        assert_eq!(claims.username.as_deref(), Some("alice"));

        // The refresh token is signed with the other secret
        assert!(authenticator.validate_token(&tokens.refresh_token).is_err());
    }

    #[test]
    fn test_refresh_access_token_keeps_identity() {
        let authenticator = authenticator();
        let tokens = authenticator
            .issue_tokens(9, "bob")
            .expect("Failed to issue tokens");

        let access_token = authenticator
            .refresh_access_token(Some(&tokens.refresh_token))
            .expect("Refresh failed");
        let claims = authenticator
            .validate_token(&access_token)
            .expect("Token validation failed");

        assert_eq!(claims.user_id, 9);
        assert_eq!(claims.username.as_deref(), Some("bob"));

        // Not rotated: the same refresh token works again
        assert!(authenticator
            .refresh_access_token(Some(&tokens.refresh_token))
            .is_ok());
    }

    #[test]
    fn test_refresh_without_token() {
        let authenticator = authenticator();

        let result = authenticator.refresh_access_token(None);
        assert!(matches!(result, Err(AuthenticationError::MissingToken)));
    }

    #[test]
    fn test_refresh_failures_are_indistinguishable() {
        let authenticator = authenticator();
        let tokens = authenticator
            .issue_tokens(9, "bob")
            .expect("Failed to issue tokens");

        let mut tampered = tokens.refresh_token.clone();
        tampered.push('x');

        let expired = authenticator
            .token_codec()
            .encode_refresh(&RefreshClaims::new(
                9,
                None,
                Utc::now() - Duration::days(8),
                Duration::days(7),
            ))
            .expect("Failed to encode");

        for token in [
            tampered.as_str(),
            expired.as_str(),
            tokens.access_token.as_str(),
            "garbage",
        ] {
            let result = authenticator.refresh_access_token(Some(token));
            assert!(matches!(
                result,
                Err(AuthenticationError::InvalidRefreshToken)
            ));
        }
    }
}
