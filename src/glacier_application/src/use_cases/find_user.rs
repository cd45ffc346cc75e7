use glacier_core::{User, UserId, UserRepository, UserRepositoryError};

/// Error types for find user use case
#[derive(Debug, thiserror::Error)]
pub enum FindUserError {
    #[error("User not found")]
    NotFound,
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("Storage error: {0}")]
    Storage(#[source] UserRepositoryError),
}

impl From<UserRepositoryError> for FindUserError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserNotFound => FindUserError::NotFound,
            UserRepositoryError::NotImplemented(operation) => {
                FindUserError::NotImplemented(operation)
            }
            other => FindUserError::Storage(other),
        }
    }
}

/// Find user use case - loads a stored user by id
pub struct FindUserUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
}

impl<'a, R> FindUserUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "FindUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId) -> Result<User, FindUserError> {
        let user = self.user_repository.find_by_id(id).await?;
        Ok(user)
    }
}
