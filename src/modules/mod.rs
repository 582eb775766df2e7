pub mod posts;
pub mod users;

use std::future::Future;
use std::time::Duration;

use lema_core::{AppError, ErrorKind};
use tracing::{error, warn};

/// Runs a store call under `deadline` and translates its failure into an
/// [`AppError`].
pub(crate) async fn with_deadline<T, F>(
    deadline: Duration,
    operation: &'static str,
    call: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(translate_store_error(operation, err)),
        Err(_) => {
            warn!(
                operation,
                deadline_ms = deadline.as_millis() as u64,
                "Store call exceeded deadline"
            );
            Err(AppError::kind(ErrorKind::Internal))
        }
    }
}

pub(crate) fn translate_store_error(operation: &'static str, err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::kind(ErrorKind::NotFound),
        // a post referencing a user that does not exist
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::kind(ErrorKind::NotFound)
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::kind(ErrorKind::BadRequest)
        }
        _ => {
            error!(operation, error = %err, "Store call failed");
            AppError::kind(ErrorKind::Internal)
        }
    }
}
