#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fake::Fake;
use fake::faker::address::en::{CityName, StateName, StreetName, ZipCode};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::{FirstName, LastName};
use http_body_util::BodyExt;
use lema::router::init_router;
use lema::state::AppState;
use lema_config::{AppConfig, Environment};
use lema_models::{CreateAddressDto, CreateUserDto, User};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Test,
        ..AppConfig::default()
    }
}

pub fn test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, test_config())
}

pub fn setup_test_app(pool: SqlitePool) -> (Router, AppState) {
    let state = test_state(pool);
    (init_router(state.clone()), state)
}

/// A valid user payload; `n` keeps the unique columns unique.
pub fn fake_user(n: usize) -> CreateUserDto {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let handle = format!("{first_name}{last_name}")
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();

    CreateUserDto {
        email: format!("{handle}{n}@example.com"),
        username: format!("{handle}{n}"),
        phone: format!("555-{:04}", n),
        first_name,
        last_name,
        address: CreateAddressDto {
            street: StreetName().fake(),
            city: CityName().fake(),
            state: StateName().fake(),
            zipcode: ZipCode().fake(),
        },
    }
}

pub async fn create_test_user(state: &AppState, n: usize) -> User {
    state.users.create_user(fake_user(n)).await.unwrap()
}

pub async fn create_test_users(state: &AppState, count: usize) -> Vec<User> {
    let mut users = Vec::with_capacity(count);
    for n in 1..=count {
        users.push(create_test_user(state, n).await);
    }
    users
}

pub fn fake_post_body(user_id: i64) -> Value {
    json!({
        "title": Sentence(2..5).fake::<String>(),
        "body": Paragraph(1..3).fake::<String>(),
        "userId": user_id
    })
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}
