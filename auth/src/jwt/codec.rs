use chrono::Duration;
use chrono::Utc;

use super::claims::AccessClaims;
use super::claims::RefreshClaims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues and verifies access and refresh tokens.
///
/// Each token kind has its own secret, so a refresh token never verifies as an
/// access token and vice versa.
pub struct TokenCodec {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from the two signing secrets and token lifetimes.
    ///
    /// # Errors
    /// * `EmptySecret` - One of the secrets is empty
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self, JwtError> {
        if access_secret.is_empty() {
            return Err(JwtError::EmptySecret("access"));
        }
        if refresh_secret.is_empty() {
            return Err(JwtError::EmptySecret("refresh"));
        }

        Ok(Self {
            access: JwtHandler::new(access_secret),
            refresh: JwtHandler::new(refresh_secret),
            access_ttl,
            refresh_ttl,
        })
    }

    /// Sign a fresh access token valid for the configured access lifetime.
    pub fn issue_access(&self, user_id: i64, username: Option<&str>) -> Result<String, JwtError> {
        let claims = AccessClaims::new(
            user_id,
            username.map(str::to_string),
            Utc::now(),
            self.access_ttl,
        );
        self.encode_access(&claims)
    }

    /// Sign a fresh refresh token valid for the configured refresh lifetime.
    pub fn issue_refresh(&self, user_id: i64, username: Option<&str>) -> Result<String, JwtError> {
        let claims = RefreshClaims::new(
            user_id,
            username.map(str::to_string),
            Utc::now(),
            self.refresh_ttl,
        );
        self.encode_refresh(&claims)
    }

    pub fn encode_access(&self, claims: &AccessClaims) -> Result<String, JwtError> {
        self.access.encode(claims)
    }

    pub fn encode_refresh(&self, claims: &RefreshClaims) -> Result<String, JwtError> {
        self.refresh.encode(claims)
    }

    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.access.decode(token)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, JwtError> {
        self.refresh.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(
            b"access_secret_at_least_32_bytes_long!",
            b"refresh_secret_at_least_32_bytes_long",
            Duration::minutes(15),
            Duration::days(7),
        )
        .expect("Failed to create codec")
    }

    #[test]
    fn test_rejects_empty_secrets() {
        let access = TokenCodec::new(b"", b"refresh", Duration::minutes(15), Duration::days(7));
        assert!(matches!(access, Err(JwtError::EmptySecret("access"))));

        let refresh = TokenCodec::new(b"access", b"", Duration::minutes(15), Duration::days(7));
        assert!(matches!(refresh, Err(JwtError::EmptySecret("refresh"))));
    }

    #[test]
    fn test_access_token_round_trip() {
        let codec = codec();

        let token = codec.issue_access(42, Some("alice")).expect("Failed to issue token");
        let claims = codec.verify_access(&token).expect("Failed to verify token");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_refresh_token_lifetime() {
        let codec = codec();

        let token = codec
            .issue_refresh(42, Some("alice"))
            .expect("Failed to issue token");
        let claims = codec.verify_refresh(&token).expect("Failed to verify token");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_token_kinds_do_not_cross_verify() {
        let codec = codec();

        let access = codec.issue_access(1, Some("alice")).expect("Failed to issue token");
        let refresh = codec
            .issue_refresh(1, Some("alice"))
            .expect("Failed to issue token");

        assert!(codec.verify_refresh(&access).is_err());
        assert!(codec.verify_access(&refresh).is_err());
    }

    #[test]
    fn test_access_token_valid_until_expiry() {
        let codec = codec();
        let now = Utc::now();

        let live = AccessClaims::new(1, Some("alice".to_string()), now, Duration::seconds(30));
        let token = codec.encode_access(&live).expect("Failed to encode");
        assert!(codec.verify_access(&token).is_ok());

        let at_expiry = AccessClaims::new(1, Some("alice".to_string()), now, Duration::zero());
        let token = codec.encode_access(&at_expiry).expect("Failed to encode");
        assert_eq!(codec.verify_access(&token), Err(JwtError::TokenExpired));

        let past = AccessClaims::new(1, Some("alice".to_string()), now, Duration::seconds(-1));
        let token = codec.encode_access(&past).expect("Failed to encode");
        assert_eq!(codec.verify_access(&token), Err(JwtError::TokenExpired));
    }
}
