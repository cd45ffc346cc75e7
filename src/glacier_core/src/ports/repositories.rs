use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{user::User, user_id::UserId};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,
    #[error("User already persisted with id {0}")]
    AlreadyPersisted(UserId),
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("Storage call timed out after {0:?}")]
    Timeout(Duration),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::AlreadyPersisted(a), Self::AlreadyPersisted(b)) => a == b,
            (Self::NotImplemented(a), Self::NotImplemented(b)) => a == b,
            (Self::Timeout(_), Self::Timeout(_)) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence port for [`User`] records.
///
/// Use cases depend on this trait only; the storage technology lives in the
/// adapters crate.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the identifier assigned by storage.
    ///
    /// Creation only: a user that already carries an identifier is rejected
    /// with [`UserRepositoryError::AlreadyPersisted`].
    async fn save(&self, user: &User) -> Result<UserId, UserRepositoryError>;

    /// Load a user by identifier.
    ///
    /// Adapters without lookup support return
    /// [`UserRepositoryError::NotImplemented`] instead of an empty result.
    async fn find_by_id(&self, id: UserId) -> Result<User, UserRepositoryError>;
}
