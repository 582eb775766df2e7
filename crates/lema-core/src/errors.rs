//! Error kinds and the HTTP error type returned by handlers.
//!
//! Every failure leaving a handler is an [`AppError`]. Its response body is
//! the standard envelope with `success: false`:
//!
//! ```json
//! { "success": false, "message": "bad request", "data": { "title": "title is required" } }
//! ```

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::response::ApiResponse;

/// The fixed taxonomy of failures an operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message for this kind.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Internal => "internal server error",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub data: Option<Value>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            data: None,
        }
    }

    /// An error carrying only the kind's status and generic message.
    pub fn kind(kind: ErrorKind) -> Self {
        Self::new(kind.status(), anyhow!(kind.message()))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn method_not_allowed<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, err)
    }

    /// Attaches a payload (e.g. field-level validation messages) to the envelope.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body: ApiResponse<Value> = ApiResponse::failure(self.error.to_string());
        body.data = self.data;

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
