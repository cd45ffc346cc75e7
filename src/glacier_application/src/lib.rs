pub mod use_cases;

pub use use_cases::{
    create_user::{CreateUserError, CreateUserUseCase},
    find_user::{FindUserError, FindUserUseCase},
};
