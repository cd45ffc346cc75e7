pub mod create_user;
pub mod find_user;
