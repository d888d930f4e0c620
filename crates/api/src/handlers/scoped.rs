//! Listings scoped to a parent row.
//!
//! Each handler answers 404 when the parent is missing and an empty array
//! when it exists but has no children.

use axum::extract::{Path, State};
use axum::Json;
use residuos_core::types::DbId;
use residuos_db::models::contenedor::Contenedor;
use residuos_db::models::facturacion::Facturacion;
use residuos_db::models::precio::Precio;
use residuos_db::models::punto_recogida::PuntoRecogida;
use residuos_db::models::recogida::Recogida;
use residuos_db::repositories::{
    ContenedorRepo, FacturacionRepo, PrecioRepo, PropietarioRepo, PuntoRecogidaRepo, RecogidaRepo,
    TipoResiduoRepo,
};

use crate::error::AppResult;
use crate::handlers::crud::ensure_exists;
use crate::state::AppState;

/// GET /api/propietarios/{dni}/puntos-recogida
pub async fn puntos_recogida_by_propietario(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> AppResult<Json<Vec<PuntoRecogida>>> {
    ensure_exists::<PropietarioRepo>(&state.pool, &dni).await?;
    let puntos = PuntoRecogidaRepo::list_by_propietario(&state.pool, &dni).await?;
    Ok(Json(puntos))
}

/// GET /api/propietarios/{dni}/facturaciones
pub async fn facturaciones_by_propietario(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> AppResult<Json<Vec<Facturacion>>> {
    ensure_exists::<PropietarioRepo>(&state.pool, &dni).await?;
    let facturaciones = FacturacionRepo::list_by_propietario(&state.pool, &dni).await?;
    Ok(Json(facturaciones))
}

/// GET /api/puntos-recogida/{id}/contenedores
pub async fn contenedores_by_punto_recogida(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Contenedor>>> {
    ensure_exists::<PuntoRecogidaRepo>(&state.pool, &id).await?;
    let contenedores = ContenedorRepo::list_by_punto_recogida(&state.pool, id).await?;
    Ok(Json(contenedores))
}

/// GET /api/tipos-residuos/{id}/precios
pub async fn precios_by_tipo_residuo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Precio>>> {
    ensure_exists::<TipoResiduoRepo>(&state.pool, &id).await?;
    let precios = PrecioRepo::list_by_tipo_residuo(&state.pool, id).await?;
    Ok(Json(precios))
}

/// GET /api/contenedores/{id}/recogidas
pub async fn recogidas_by_contenedor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Recogida>>> {
    ensure_exists::<ContenedorRepo>(&state.pool, &id).await?;
    let recogidas = RecogidaRepo::list_by_contenedor(&state.pool, id).await?;
    Ok(Json(recogidas))
}
