use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use glacier_application::{CreateUserError, FindUserError};
use glacier_core::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum UserApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            UserApiError::InvalidInput(_) | UserApiError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            UserApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            UserApiError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, self.to_string()),

            // The cause stays in the logs, clients get a generic message
            UserApiError::UnexpectedError(ref cause) => {
                tracing::error!(error = %cause, "Request failed with a storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<ValidationError> for UserApiError {
    fn from(error: ValidationError) -> Self {
        UserApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for UserApiError {
    fn from(rejection: JsonRejection) -> Self {
        UserApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for UserApiError {
    fn from(rejection: PathRejection) -> Self {
        UserApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<CreateUserError> for UserApiError {
    fn from(error: CreateUserError) -> Self {
        match error {
            CreateUserError::Validation(e) => e.into(),
            CreateUserError::Storage(e) => UserApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<FindUserError> for UserApiError {
    fn from(error: FindUserError) -> Self {
        match error {
            FindUserError::NotFound => UserApiError::UserNotFound,
            FindUserError::NotImplemented(operation) => UserApiError::NotImplemented(operation),
            FindUserError::Storage(e) => UserApiError::UnexpectedError(e.to_string()),
        }
    }
}
