use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_user, get_user_count, get_users};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/count", get(get_user_count))
        .route("/{user_id}", get(get_user))
}
