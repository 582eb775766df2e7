use axum::extract::{Path, State};
use lema_core::{ApiResponse, AppError, PaginationQuery};
use lema_models::{PaginatedUsers, User, UserCount};
use tracing::instrument;
use validator::Validate;

use crate::state::AppState;
use crate::validator::{QueryParams, parse_id, validation_error};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Users fetched successfully", body = PaginatedUsers),
        (status = 400, description = "Invalid page or limit"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PaginationQuery>,
) -> Result<ApiResponse<PaginatedUsers>, AppError> {
    let page = query.parse().map_err(AppError::bad_request)?;
    page.validate().map_err(|errors| validation_error(&errors))?;

    let users = state.users.get_users(page).await?;

    Ok(ApiResponse::new("Users fetched successfully").with_data(users))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/count",
    responses(
        (status = 200, description = "Users count fetched successfully", body = UserCount),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_count(
    State(state): State<AppState>,
) -> Result<ApiResponse<UserCount>, AppError> {
    let count = state.users.get_user_count().await?;

    Ok(ApiResponse::new("Users count fetched successfully").with_data(UserCount { count }))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User fetched successfully", body = User),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<User>, AppError> {
    let id = parse_id(&user_id, "Invalid user ID")?;
    let user = state.users.get_user(id).await?;

    Ok(ApiResponse::new("User fetched successfully").with_data(user))
}
