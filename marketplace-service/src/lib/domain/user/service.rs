use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::resolver;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for login, registration, and token refresh.
///
/// Argon2 work runs on the blocking pool so request workers stay free.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential storage
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, UserError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| UserError::Unknown(format!("Blocking task failed: {}", e)))
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        let LoginCommand { identity, password } = command;

        let user = resolver::resolve(self.repository.as_ref(), &identity).await?;

        // Runs even when no user was found, against the dummy digest
        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified =
            run_blocking(move || authenticator.verify_credentials(&password, stored_hash.as_deref()))
                .await?;

        if let Err(e) = verified {
            tracing::warn!("Login rejected: {}", e);
            return Err(e.into());
        }

        let user = user.ok_or(UserError::InvalidCredentials)?;
        let tokens = self
            .authenticator
            .issue_tokens(user.id.0, user.username.as_str())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let RegisterUserCommand {
            username,
            email,
            password,
        } = command;

        // Both lookups run; the email conflict wins when both are taken
        let email_taken = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .is_some();
        let username_taken = self
            .repository
            .find_by_username(username.as_str())
            .await?
            .is_some();

        if email_taken {
            return Err(UserError::EmailAlreadyExists(email.as_str().to_string()));
        }
        if username_taken {
            return Err(UserError::UsernameAlreadyExists(
                username.as_str().to_string(),
            ));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            run_blocking(move || authenticator.hash_password(password.expose())).await??;

        // A concurrent registration can still win here; the repository maps
        // the unique violation to the matching conflict.
        let created_user = self
            .repository
            .create(NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn refresh_access_token(
        &self,
        refresh_token: Option<String>,
    ) -> Result<String, UserError> {
        self.authenticator
            .refresh_access_token(refresh_token.as_deref())
            .map_err(UserError::from)
    }
}
