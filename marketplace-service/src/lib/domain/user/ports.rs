use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Arguments
    /// * `command` - Login identity (email or username) and plaintext password
    ///
    /// # Returns
    /// The authenticated user and both tokens
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identity or wrong password (indistinguishable)
    /// * `DatabaseError` - Credential lookup failed
    /// * `Token` - Token signing failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError>;

    /// Register a new user with a hashed password.
    ///
    /// # Arguments
    /// * `command` - Validated username, email, and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (checked first)
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Mint a new access token from a refresh token.
    ///
    /// # Errors
    /// * `AuthenticationRequired` - No refresh token presented
    /// * `InvalidRefreshToken` - Token is tampered, expired, or malformed
    async fn refresh_access_token(&self, refresh_token: Option<String>)
        -> Result<String, UserError>;
}

/// Persistence operations for user credentials.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username unique constraint violated
    /// * `EmailAlreadyExists` - Email unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
}
