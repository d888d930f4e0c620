//! Generic route table for a CRUD resource.

use axum::routing::get;
use axum::Router;
use residuos_db::repositories::CrudRepo;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes for one resource backed by repository `R`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{key}     -> get_by_key
/// PUT    /{key}     -> update
/// DELETE /{key}     -> delete
/// ```
pub fn crud_router<R: CrudRepo>() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<R>).post(crud::create::<R>))
        .route(
            "/{key}",
            get(crud::get_by_key::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}
