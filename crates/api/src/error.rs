use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use residuos_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Store errors enter through `From<sqlx::Error>`: constraint violations
/// become [`CoreError::Conflict`], everything else stays a
/// [`AppError::Database`]. A missing row is a bare 404, every other error a
/// JSON body with `error` and `code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `residuos_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that no constraint explains.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match constraint_conflict(&err) {
            Some(message) => AppError::Core(CoreError::Conflict(message)),
            None => AppError::Database(err),
        }
    }
}

/// Describe a constraint violation the caller can resolve.
///
/// - Unique violations (SQLSTATE `23505`), e.g. a duplicate DNI.
/// - Foreign-key violations (`23503`): either the body points at a row that
///   does not exist, or the row being deleted is still referenced.
///
/// Any other error yields `None`.
fn constraint_conflict(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    let constraint = db_err.constraint().unwrap_or("unknown");
    match db_err.code().as_deref() {
        Some("23505") => Some(format!(
            "Duplicate value violates unique constraint: {constraint}"
        )),
        Some("23503") => Some(format!(
            "Operation violates foreign key constraint: {constraint}"
        )),
        _ => None,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                tracing::debug!(entity, key = %key, "Entity not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                tracing::debug!(error = %msg, "Constraint conflict");
                (StatusCode::CONFLICT, "CONFLICT", msg)
            }
            AppError::Database(sqlx::Error::RowNotFound) => {
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
