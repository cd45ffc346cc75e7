pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    user::User,
    user_id::UserId,
    validation_error::ValidationError,
};

pub use ports::repositories::{UserRepository, UserRepositoryError};
