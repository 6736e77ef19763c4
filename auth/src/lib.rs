//! Authentication utilities library
//!
//! Provides the authentication building blocks used by the marketplace service:
//! - Password hashing (Argon2id, pinned parameters)
//! - Access and refresh token signing with independent secrets
//! - Authentication coordination (credential check, token pair, refresh)
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new().unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(
//!     b"access_secret_key_at_least_32_bytes!",
//!     b"refresh_secret_key_at_least_32_bytes",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! )
//! .unwrap();
//! let auth = Authenticator::new(PasswordHasher::new().unwrap(), codec);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue tokens
//! auth.verify_credentials("password123", Some(&hash)).unwrap();
//! let tokens = auth.issue_tokens(1, "alice").unwrap();
//!
//! // Later: mint a new access token from the refresh token
//! let access = auth.refresh_access_token(Some(&tokens.refresh_token)).unwrap();
//! assert_eq!(auth.validate_token(&access).unwrap().user_id, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::RefreshClaims;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;
