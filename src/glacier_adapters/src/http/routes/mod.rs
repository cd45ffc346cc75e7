pub mod create_user;
pub mod error;
pub mod find_user;
pub mod health_check;

pub use create_user::{CreateUserRequest, UserResponse, create_user};
pub use error::{ErrorResponse, UserApiError};
pub use find_user::find_user;
pub use health_check::health_check;
