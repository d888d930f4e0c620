//! Owner-specific handlers beyond the generic CRUD set.

use axum::extract::{Path, State};
use axum::Json;
use residuos_core::error::CoreError;
use residuos_db::models::propietario::CascadeDeleteReport;
use residuos_db::repositories::{CrudRepo, PropietarioRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// DELETE /api/propietarios/{dni}/cascade
///
/// Removes the owner with its collection points, their containers and
/// pickups, and its billing records, all in one transaction.
pub async fn cascade_delete(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> AppResult<Json<CascadeDeleteReport>> {
    let report = PropietarioRepo::cascade_delete(&state.pool, &dni)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(PropietarioRepo::ENTITY, &dni)))?;
    tracing::info!(
        dni = %dni,
        recogidas = report.recogidas,
        contenedores = report.contenedores,
        puntos_recogida = report.puntos_recogida,
        facturaciones = report.facturaciones,
        "Owner deleted with dependents"
    );
    Ok(Json(report))
}
