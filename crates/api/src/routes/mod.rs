pub mod health;
pub mod resource;

use axum::routing::{delete, get};
use axum::Router;
use residuos_db::repositories::{
    ContenedorRepo, FacturacionRepo, PrecioRepo, PropietarioRepo, PuntoRecogidaRepo, RecogidaRepo,
    TipoResiduoRepo,
};

use crate::handlers::{propietario, scoped};
use crate::state::AppState;
use resource::crud_router;

/// Build the `/api` route tree.
///
/// Every resource gets the generic CRUD table (see [`crud_router`]):
///
/// ```text
/// /tipos-residuos[/{id}]
/// /propietarios[/{dni}]
/// /puntos-recogida[/{id}]
/// /contenedores[/{id}]
/// /precios[/{id}]
/// /facturaciones[/{id}]
/// /recogidas[/{id}]
/// ```
///
/// Plus scoped listings and the owner cascade:
///
/// ```text
/// GET    /propietarios/{dni}/puntos-recogida
/// GET    /propietarios/{dni}/facturaciones
/// DELETE /propietarios/{dni}/cascade
/// GET    /puntos-recogida/{id}/contenedores
/// GET    /tipos-residuos/{id}/precios
/// GET    /contenedores/{id}/recogidas
/// ```
pub fn api_routes() -> Router<AppState> {
    let tipos_residuos = crud_router::<TipoResiduoRepo>()
        .route("/{key}/precios", get(scoped::precios_by_tipo_residuo));

    let propietarios = crud_router::<PropietarioRepo>()
        .route(
            "/{key}/puntos-recogida",
            get(scoped::puntos_recogida_by_propietario),
        )
        .route(
            "/{key}/facturaciones",
            get(scoped::facturaciones_by_propietario),
        )
        .route("/{key}/cascade", delete(propietario::cascade_delete));

    let puntos_recogida = crud_router::<PuntoRecogidaRepo>().route(
        "/{key}/contenedores",
        get(scoped::contenedores_by_punto_recogida),
    );

    let contenedores = crud_router::<ContenedorRepo>()
        .route("/{key}/recogidas", get(scoped::recogidas_by_contenedor));

    Router::new()
        .nest("/tipos-residuos", tipos_residuos)
        .nest("/propietarios", propietarios)
        .nest("/puntos-recogida", puntos_recogida)
        .nest("/contenedores", contenedores)
        .nest("/precios", crud_router::<PrecioRepo>())
        .nest("/facturaciones", crud_router::<FacturacionRepo>())
        .nest("/recogidas", crud_router::<RecogidaRepo>())
}
