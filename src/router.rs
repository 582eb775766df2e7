use std::any::Any;

use anyhow::anyhow;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use lema_core::{ApiResponse, AppError, ErrorKind};
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer};
use tracing::error;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::modules::posts::controller::{create_post, get_posts};
use crate::modules::posts::init_posts_router;
use crate::modules::users::controller::get_users;
use crate::modules::users::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/ping", get(ping))
        .nest(
            "/api/v1",
            Router::new()
                .nest("/users", init_users_router())
                .nest("/posts", init_posts_router())
                // collection roots also answer with a trailing slash
                .route("/users/", get(get_users))
                .route("/posts/", get(get_posts).post(create_post)),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(envelope_rejections))
        .layer(CatchPanicLayer::custom(handle_panic))
}

#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = "Health"
)]
pub async fn ping() -> ApiResponse<()> {
    ApiResponse::new("pong")
}

async fn not_found(request: Request) -> AppError {
    AppError::not_found(anyhow!(
        "{} {} not found",
        request.method(),
        request.uri().path()
    ))
}

/// Rewrites the plain-text 405 and 413 responses produced outside our
/// handlers into the JSON envelope.
async fn envelope_rejections(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    if is_json(&response) {
        return response;
    }

    match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            let allow = response.headers().get(header::ALLOW).cloned();
            let mut rewritten =
                AppError::method_not_allowed(anyhow!("{} {} not allowed", method, path))
                    .into_response();
            if let Some(allow) = allow {
                rewritten.headers_mut().insert(header::ALLOW, allow);
            }
            rewritten
        }
        StatusCode::PAYLOAD_TOO_LARGE => AppError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            anyhow!("Request body too large"),
        )
        .into_response(),
        _ => response,
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "Handler panicked");

    AppError::kind(ErrorKind::Internal).into_response()
}
