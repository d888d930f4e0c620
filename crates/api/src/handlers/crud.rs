//! Generic handlers for the five CRUD operations.
//!
//! Every resource is served by these functions instantiated with its
//! repository, e.g. `get(crud::list::<ContenedorRepo>)`. The key type comes
//! from the repository, so `/{key}` parses as an integer id for most
//! resources and as a DNI string for owners.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use residuos_core::error::CoreError;
use residuos_db::repositories::CrudRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Verify that the row at `key` exists, returning NotFound if it does not.
pub async fn ensure_exists<R: CrudRepo>(pool: &sqlx::PgPool, key: &R::Key) -> AppResult<()> {
    if !R::exists(pool, key).await? {
        return Err(AppError::Core(CoreError::not_found(R::ENTITY, key)));
    }
    Ok(())
}

/// GET /api/{resource}
pub async fn list<R: CrudRepo>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Entity>>> {
    let items = R::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/{resource}/{key}
pub async fn get_by_key<R: CrudRepo>(
    State(state): State<AppState>,
    Path(key): Path<R::Key>,
) -> AppResult<Json<R::Entity>> {
    let item = R::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(R::ENTITY, &key)))?;
    Ok(Json(item))
}

/// POST /api/{resource}
///
/// A key in the body is ignored for generated-id resources; the store
/// assigns one.
pub async fn create<R: CrudRepo>(
    State(state): State<AppState>,
    Json(input): Json<R::Input>,
) -> AppResult<(StatusCode, Json<R::Entity>)> {
    let item = R::create(&state.pool, &input).await?;
    tracing::info!(entity = R::ENTITY, "Entity created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/{resource}/{key}
///
/// Full replace of an existing row; the path key wins over any key in the body.
pub async fn update<R: CrudRepo>(
    State(state): State<AppState>,
    Path(key): Path<R::Key>,
    Json(input): Json<R::Input>,
) -> AppResult<Json<R::Entity>> {
    let item = R::update(&state.pool, &key, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(R::ENTITY, &key)))?;
    tracing::info!(entity = R::ENTITY, key = %key, "Entity updated");
    Ok(Json(item))
}

/// DELETE /api/{resource}/{key}
pub async fn delete<R: CrudRepo>(
    State(state): State<AppState>,
    Path(key): Path<R::Key>,
) -> AppResult<StatusCode> {
    if R::delete(&state.pool, &key).await? {
        tracing::info!(entity = R::ENTITY, key = %key, "Entity deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(R::ENTITY, &key)))
    }
}
