//! Request extractors that reject with the JSON envelope instead of axum's
//! plain-text rejections.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use lema_core::{AppError, ErrorKind};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Field-level messages as a JSON object; nested structs become nested objects.
pub fn validation_data(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();

    for (field, kind) in errors.errors() {
        let value = match kind {
            ValidationErrorsKind::Field(errors) => Value::String(
                errors
                    .iter()
                    .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
                    .unwrap_or_else(|| format!("{} is invalid", field)),
            ),
            ValidationErrorsKind::Struct(nested) => validation_data(nested),
            ValidationErrorsKind::List(_) => Value::String(format!("{} is invalid", field)),
        };
        fields.insert(field.to_string(), value);
    }

    Value::Object(fields)
}

pub fn validation_error(errors: &ValidationErrors) -> AppError {
    AppError::kind(ErrorKind::BadRequest).with_data(validation_data(errors))
}

/// Parses a numeric identifier from a path or query segment.
pub fn parse_id(raw: &str, message: &'static str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(anyhow!(message)))
}

fn json_rejection_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            anyhow!("Request body too large"),
        );
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

/// JSON body that has passed its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_error)?;

        value.validate().map_err(|errors| validation_error(&errors))?;

        Ok(ValidatedJson(value))
    }
}

/// Query string extractor whose rejection is a 400 envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection.body_text(), "Rejected query string");
                AppError::bad_request(anyhow!("Invalid query parameters"))
            })?;

        Ok(QueryParams(value))
    }
}
