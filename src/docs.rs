use lema_core::{PageMeta, PageRequest};
use lema_models::{Address, CreateAddressDto, CreatePostDto, PaginatedUsers, Post, User, UserCount};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user_count,
        crate::modules::users::controller::get_user,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::get_posts,
        crate::modules::posts::controller::get_post,
        crate::modules::posts::controller::delete_post,
        crate::router::ping,
    ),
    components(
        schemas(
            User,
            Address,
            CreateAddressDto,
            PaginatedUsers,
            UserCount,
            Post,
            CreatePostDto,
            PageMeta,
            PageRequest,
        )
    ),
    tags(
        (name = "Users", description = "Users and their addresses"),
        (name = "Posts", description = "Posts written by users"),
        (name = "Health", description = "Liveness checks")
    ),
    info(
        title = "Lema API",
        version = "0.1.0",
        description = "A REST API for users, their addresses and their posts, built with Rust, Axum and SQLite.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
