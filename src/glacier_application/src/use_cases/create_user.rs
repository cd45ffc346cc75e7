use glacier_core::{User, UserRepository, UserRepositoryError, ValidationError};

/// Error types for create user use case
#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] UserRepositoryError),
}

/// Create user use case - validates input and persists a new user
pub struct CreateUserUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
}

impl<'a, R> CreateUserUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    /// Execute the create user use case
    ///
    /// # Arguments
    /// * `name` - Display name, must not be empty
    /// * `email` - Email address, must match the accepted pattern
    ///
    /// # Returns
    /// The stored user carrying its assigned id, or CreateUserError.
    /// Invalid input never reaches the repository.
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self, name))]
    pub async fn execute(&self, name: String, email: String) -> Result<User, CreateUserError> {
        tracing::info!("Attempting to create a new user");

        let user = User::new(name, email)?;
        let user_id = self.user_repository.save(&user).await?;

        tracing::info!(user_id = %user_id, "Successfully created user");
        Ok(user.with_id(user_id))
    }
}
