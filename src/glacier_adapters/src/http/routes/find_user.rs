use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use glacier_application::FindUserUseCase;
use glacier_core::{UserId, UserRepository};

use super::{create_user::UserResponse, error::UserApiError};

#[tracing::instrument(name = "Find user", skip_all)]
pub async fn find_user<R>(
    State(user_repository): State<R>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, UserApiError>
where
    R: UserRepository + Clone + 'static,
{
    let Path(id) = id?;

    let use_case = FindUserUseCase::new(&user_repository);
    let user = use_case.execute(UserId::new(id)).await?;

    Ok(Json(UserResponse::from(user)))
}
