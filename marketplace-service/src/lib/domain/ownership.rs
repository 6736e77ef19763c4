use thiserror::Error;

use crate::domain::user::models::UserId;

/// Raised when an authenticated user touches a resource owned by someone else.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("You do not own this resource")]
    NotOwner { owner: UserId, caller: UserId },
}

/// A resource with a recorded owner.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// Allow a mutation only when the caller is the resource owner.
pub fn assert_owner(resource_owner: UserId, authenticated: UserId) -> Result<(), OwnershipError> {
    if resource_owner == authenticated {
        Ok(())
    } else {
        Err(OwnershipError::NotOwner {
            owner: resource_owner,
            caller: authenticated,
        })
    }
}

/// [`assert_owner`] for anything implementing [`Owned`].
pub fn assert_owns<R: Owned>(resource: &R, authenticated: UserId) -> Result<(), OwnershipError> {
    assert_owner(resource.owner_id(), authenticated)
}
