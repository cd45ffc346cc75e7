use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use glacier_application::CreateUserUseCase;
use glacier_core::{User, UserId, UserRepository};
use serde::{Deserialize, Serialize};

use super::error::UserApiError;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_owned(),
            email: user.email().to_string(),
        }
    }
}

#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user<R>(
    State(user_repository): State<R>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, UserApiError>
where
    R: UserRepository + Clone + 'static,
{
    // Reject unparsable bodies before the use case runs
    let Json(request) = request?;

    let use_case = CreateUserUseCase::new(&user_repository);
    let user = use_case.execute(request.name, request.email).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
