//! Repository for the `punto_recogida` table.

use async_trait::async_trait;
use residuos_core::types::DbId;
use sqlx::PgPool;

use crate::lookup::{distinct_keys, index_by};
use crate::models::punto_recogida::{PuntoRecogida, PuntoRecogidaInput, PuntoRecogidaRow};
use crate::models::reference::dni_of;
use crate::repositories::{CrudRepo, PropietarioRepo};

const COLUMNS: &str = "id, localidad, cp, provincia, direccion, horario, tipo, dni";

/// Provides CRUD operations for collection points.
pub struct PuntoRecogidaRepo;

impl PuntoRecogidaRepo {
    /// Load every collection point whose id is in `ids`, owners expanded.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<PuntoRecogida>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM punto_recogida WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, PuntoRecogidaRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    /// All collection points owned by `dni`, ordered by id.
    pub async fn list_by_propietario(
        pool: &PgPool,
        dni: &str,
    ) -> Result<Vec<PuntoRecogida>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM punto_recogida WHERE dni = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, PuntoRecogidaRow>(&query)
            .bind(dni)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    /// Resolve the owner of every row with one batched lookup.
    async fn expand(
        pool: &PgPool,
        rows: Vec<PuntoRecogidaRow>,
    ) -> Result<Vec<PuntoRecogida>, sqlx::Error> {
        let dnis = distinct_keys(rows.iter().map(|r| r.dni.clone()));
        let propietarios = index_by(PropietarioRepo::find_by_dnis(pool, &dnis).await?, |p| {
            p.dni.clone()
        });
        Ok(rows
            .into_iter()
            .map(|row| row.into_model(&propietarios))
            .collect())
    }

    async fn expand_one(
        pool: &PgPool,
        row: Option<PuntoRecogidaRow>,
    ) -> Result<Option<PuntoRecogida>, sqlx::Error> {
        match row {
            Some(row) => Ok(Self::expand(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CrudRepo for PuntoRecogidaRepo {
    type Key = DbId;
    type Entity = PuntoRecogida;
    type Input = PuntoRecogidaInput;

    const ENTITY: &'static str = "PuntoRecogida";

    async fn list(pool: &PgPool) -> Result<Vec<PuntoRecogida>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM punto_recogida ORDER BY id");
        let rows = sqlx::query_as::<_, PuntoRecogidaRow>(&query)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn find_by_key(pool: &PgPool, id: &DbId) -> Result<Option<PuntoRecogida>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM punto_recogida WHERE id = $1");
        let row = sqlx::query_as::<_, PuntoRecogidaRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn exists(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM punto_recogida WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    async fn create(
        pool: &PgPool,
        input: &PuntoRecogidaInput,
    ) -> Result<PuntoRecogida, sqlx::Error> {
        let query = format!(
            "INSERT INTO punto_recogida (localidad, cp, provincia, direccion, horario, tipo, dni)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PuntoRecogidaRow>(&query)
            .bind(&input.localidad)
            .bind(input.cp)
            .bind(&input.provincia)
            .bind(&input.direccion)
            .bind(&input.horario)
            .bind(&input.tipo)
            .bind(dni_of(&input.propietario))
            .fetch_one(pool)
            .await?;
        Self::expand_one(pool, Some(row))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update(
        pool: &PgPool,
        id: &DbId,
        input: &PuntoRecogidaInput,
    ) -> Result<Option<PuntoRecogida>, sqlx::Error> {
        let query = format!(
            "UPDATE punto_recogida SET
                localidad = $2,
                cp = $3,
                provincia = $4,
                direccion = $5,
                horario = $6,
                tipo = $7,
                dni = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PuntoRecogidaRow>(&query)
            .bind(id)
            .bind(&input.localidad)
            .bind(input.cp)
            .bind(&input.provincia)
            .bind(&input.direccion)
            .bind(&input.horario)
            .bind(&input.tipo)
            .bind(dni_of(&input.propietario))
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn delete(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM punto_recogida WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
