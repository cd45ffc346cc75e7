pub mod email;
pub mod user;
pub mod user_id;
pub mod validation_error;

#[cfg(test)]
pub(crate) mod test_fixtures;
