use crate::domain::user::models::LoginIdentity;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Resolve a login identity to a stored credential.
///
/// `Ok(None)` means no such user; storage failures stay errors so the caller
/// can tell "unknown user" from "database unavailable".
pub async fn resolve<R>(repository: &R, identity: &LoginIdentity) -> Result<Option<User>, UserError>
where
    R: UserRepository + ?Sized,
{
    match identity {
        LoginIdentity::Email(email) => repository.find_by_email(email).await,
        LoginIdentity::Username(username) => repository.find_by_username(username).await,
    }
}
