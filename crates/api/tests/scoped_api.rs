//! Integration tests for scoped listings, the owner cascade and
//! restricted deletes.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get};
use serde_json::{json, Value};
use sqlx::PgPool;

/// One owner with a collection point, a container, a pickup, a price and a
/// bill. Returns `(tipo_id, punto_id, contenedor_id)`.
async fn seed_owner_graph(pool: &PgPool, dni: &str) -> (i64, i64, i64) {
    create(pool, "/api/propietarios", json!({"dni": dni, "nombre": "Dueno"})).await;
    let tipo = create(pool, "/api/tipos-residuos", json!({"descripcion": "Vidrio"})).await;
    let punto = create(
        pool,
        "/api/puntos-recogida",
        json!({"localidad": "Cadiz", "propietario": {"dni": dni}}),
    )
    .await;
    let contenedor = create(
        pool,
        "/api/contenedores",
        json!({
            "capacidad": 1000,
            "tipoResiduo": {"id": tipo["id"]},
            "puntoRecogida": {"id": punto["id"]}
        }),
    )
    .await;
    create(
        pool,
        "/api/recogidas",
        json!({"incidencias": "Ninguna", "contenedor": {"id": contenedor["id"]}}),
    )
    .await;
    create(
        pool,
        "/api/precios",
        json!({"valor": 0.12, "tipoResiduo": {"id": tipo["id"]}}),
    )
    .await;
    create(
        pool,
        "/api/facturaciones",
        json!({"total": 40.0, "propietario": {"dni": dni}, "tipoResiduo": {"id": tipo["id"]}}),
    )
    .await;

    (
        tipo["id"].as_i64().unwrap(),
        punto["id"].as_i64().unwrap(),
        contenedor["id"].as_i64().unwrap(),
    )
}

async fn list_len(pool: &PgPool, uri: &str) -> usize {
    let response = get(common::build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let json: Value = body_json(response).await;
    json.as_array().unwrap().len()
}

// ---------------------------------------------------------------------------
// Scoped listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn scoped_listings_return_children(pool: PgPool) {
    let (tipo, punto, contenedor) = seed_owner_graph(&pool, "55555555F").await;
    seed_owner_graph(&pool, "66666666G").await;

    assert_eq!(list_len(&pool, "/api/propietarios/55555555F/puntos-recogida").await, 1);
    assert_eq!(list_len(&pool, "/api/propietarios/55555555F/facturaciones").await, 1);
    assert_eq!(list_len(&pool, &format!("/api/puntos-recogida/{punto}/contenedores")).await, 1);
    assert_eq!(list_len(&pool, &format!("/api/tipos-residuos/{tipo}/precios")).await, 1);
    assert_eq!(list_len(&pool, &format!("/api/contenedores/{contenedor}/recogidas")).await, 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/contenedores/{contenedor}/recogidas")).await).await;
    assert_eq!(json[0]["contenedor"]["id"], contenedor);
    assert_eq!(
        json[0]["contenedor"]["puntoRecogida"]["propietario"]["dni"],
        "55555555F"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scoped_listing_of_childless_parent_is_empty(pool: PgPool) {
    create(&pool, "/api/propietarios", json!({"dni": "77777777H"})).await;
    assert_eq!(list_len(&pool, "/api/propietarios/77777777H/puntos-recogida").await, 0);
    assert_eq!(list_len(&pool, "/api/propietarios/77777777H/facturaciones").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scoped_listing_of_missing_parent_is_404(pool: PgPool) {
    for uri in [
        "/api/propietarios/00000000X/puntos-recogida",
        "/api/propietarios/00000000X/facturaciones",
        "/api/puntos-recogida/42/contenedores",
        "/api/tipos-residuos/42/precios",
        "/api/contenedores/42/recogidas",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

// ---------------------------------------------------------------------------
// Restricted delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_referenced_row_conflicts(pool: PgPool) {
    let (tipo, _, contenedor) = seed_owner_graph(&pool, "88888888J").await;

    for uri in [
        format!("/api/contenedores/{contenedor}"),
        format!("/api/tipos-residuos/{tipo}"),
        "/api/propietarios/88888888J".to_string(),
    ] {
        let response = delete(common::build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::CONFLICT, "DELETE {uri}");
        assert_eq!(body_json(response).await["code"], "CONFLICT");

        let response = get(common::build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

// ---------------------------------------------------------------------------
// Owner cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cascade_removes_owner_and_dependents(pool: PgPool) {
    let (tipo, punto, contenedor) = seed_owner_graph(&pool, "99999999K").await;
    seed_owner_graph(&pool, "10101010L").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/propietarios/99999999K/cascade").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"recogidas": 1, "contenedores": 1, "puntosRecogida": 1, "facturaciones": 1})
    );

    for uri in [
        "/api/propietarios/99999999K".to_string(),
        format!("/api/puntos-recogida/{punto}"),
        format!("/api/contenedores/{contenedor}"),
    ] {
        let response = get(common::build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    // Shared catalog rows and the other owner's data survive.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/tipos-residuos/{tipo}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list_len(&pool, "/api/recogidas").await, 1);
    assert_eq!(list_len(&pool, "/api/facturaciones").await, 1);
    assert_eq!(list_len(&pool, "/api/precios").await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cascade_of_unknown_owner_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/propietarios/00000000X/cascade").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn query_filters_on_generic_lists_are_ignored(pool: PgPool) {
    let (tipo, punto, _) = seed_owner_graph(&pool, "12121212M").await;
    seed_owner_graph(&pool, "13131313N").await;

    for uri in [
        "/api/puntos-recogida?dni=12121212M".to_string(),
        format!("/api/contenedores?puntoRecogidaId={punto}"),
        format!("/api/precios?tipoResiduoId={tipo}"),
        "/api/facturaciones?dni=12121212M".to_string(),
    ] {
        assert_eq!(list_len(&pool, &uri).await, 2, "GET {uri}");
    }
}
