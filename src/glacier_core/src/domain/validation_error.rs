use thiserror::Error;

/// Reasons a [`User`](super::user::User) can fail to construct.
///
/// The messages describe the caller's own input and are safe to return to
/// HTTP clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty field: {0}")]
    EmptyField(&'static str),
    #[error("invalid email format")]
    InvalidEmailFormat,
}
