use axum::extract::{Path, State};
use lema_core::{ApiResponse, AppError};
use lema_models::{CreatePostDto, Post, PostFilterParams};
use tracing::instrument;

use crate::state::AppState;
use crate::validator::{QueryParams, ValidatedJson, parse_id};

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post created successfully", body = Post),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "User not found")
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<ApiResponse<Post>, AppError> {
    let post = state.posts.create_post(dto).await?;

    Ok(ApiResponse::new("Post created successfully").with_data(post))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostFilterParams),
    responses(
        (status = 200, description = "Posts fetched successfully", body = Vec<Post>),
        (status = 400, description = "Invalid user ID")
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn get_posts(
    State(state): State<AppState>,
    QueryParams(filters): QueryParams<PostFilterParams>,
) -> Result<ApiResponse<Vec<Post>>, AppError> {
    let user_id = parse_id(filters.user_id.as_deref().unwrap_or_default(), "Invalid user ID")?;
    let posts = state.posts.get_posts(user_id).await?;

    Ok(ApiResponse::new("Posts fetched successfully").with_data(posts))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}",
    params(
        ("post_id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post fetched successfully", body = Post),
        (status = 400, description = "Invalid post ID"),
        (status = 404, description = "Post not found")
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiResponse<Post>, AppError> {
    let id = parse_id(&post_id, "Invalid post ID")?;
    let post = state.posts.get_post(id).await?;

    Ok(ApiResponse::new("Post fetched successfully").with_data(post))
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}",
    params(
        ("post_id" = i64, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted successfully"),
        (status = 400, description = "Invalid post ID")
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let id = parse_id(&post_id, "Invalid post ID")?;
    state.posts.delete_post(id).await?;

    Ok(ApiResponse::new("Post deleted successfully"))
}
