//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values and need no
//! database.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use residuos_api::error::AppError;
use residuos_core::error::CoreError;

/// Convert an `AppError` into its status code and raw body.
async fn error_to_response(err: AppError) -> (StatusCode, Vec<u8>) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn error_to_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = error_to_response(err).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_is_bare_404() {
    let err = AppError::Core(CoreError::not_found("Contenedor", 42));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn row_not_found_is_bare_404() {
    let (status, body) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn conflict_returns_409_with_message() {
    let err = AppError::Core(CoreError::Conflict("dni already registered".into()));

    let (status, json) = error_to_json(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "dni already registered");
}

#[tokio::test]
async fn unclassified_database_error_is_500() {
    let err = AppError::from(sqlx::Error::PoolTimedOut);
    assert_matches!(err, AppError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_json(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_converts_without_conflict() {
    let err = AppError::from(sqlx::Error::RowNotFound);
    assert_matches!(err, AppError::Database(sqlx::Error::RowNotFound));
}
