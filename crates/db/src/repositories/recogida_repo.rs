//! Repository for the `recogida` table.

use async_trait::async_trait;
use residuos_core::types::DbId;
use sqlx::PgPool;

use crate::lookup::{distinct_keys, index_by};
use crate::models::recogida::{Recogida, RecogidaInput, RecogidaRow};
use crate::models::reference::id_of;
use crate::repositories::{ContenedorRepo, CrudRepo};

const COLUMNS: &str = "id, fecha_solicitud, fecha_recogida_estimada, fecha_recogida_real, \
                       incidencias, id_contenedor";

/// Provides CRUD operations for pickups.
pub struct RecogidaRepo;

impl RecogidaRepo {
    /// All pickups of one container, ordered by id.
    pub async fn list_by_contenedor(
        pool: &PgPool,
        contenedor_id: DbId,
    ) -> Result<Vec<Recogida>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recogida WHERE id_contenedor = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, RecogidaRow>(&query)
            .bind(contenedor_id)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    /// Containers are loaded fully expanded, so a page of pickups costs a
    /// fixed number of queries regardless of its size.
    async fn expand(pool: &PgPool, rows: Vec<RecogidaRow>) -> Result<Vec<Recogida>, sqlx::Error> {
        let contenedor_ids = distinct_keys(rows.iter().map(|r| r.id_contenedor));
        let contenedores = index_by(
            ContenedorRepo::find_by_ids(pool, &contenedor_ids).await?,
            |c| c.id,
        );
        Ok(rows
            .into_iter()
            .map(|row| row.into_model(&contenedores))
            .collect())
    }

    async fn expand_one(
        pool: &PgPool,
        row: Option<RecogidaRow>,
    ) -> Result<Option<Recogida>, sqlx::Error> {
        match row {
            Some(row) => Ok(Self::expand(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CrudRepo for RecogidaRepo {
    type Key = DbId;
    type Entity = Recogida;
    type Input = RecogidaInput;

    const ENTITY: &'static str = "Recogida";

    async fn list(pool: &PgPool) -> Result<Vec<Recogida>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recogida ORDER BY id");
        let rows = sqlx::query_as::<_, RecogidaRow>(&query)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn find_by_key(pool: &PgPool, id: &DbId) -> Result<Option<Recogida>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recogida WHERE id = $1");
        let row = sqlx::query_as::<_, RecogidaRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn exists(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recogida WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &RecogidaInput) -> Result<Recogida, sqlx::Error> {
        let query = format!(
            "INSERT INTO recogida
                (fecha_solicitud, fecha_recogida_estimada, fecha_recogida_real, incidencias,
                 id_contenedor)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecogidaRow>(&query)
            .bind(input.fecha_solicitud)
            .bind(input.fecha_recogida_estimada)
            .bind(input.fecha_recogida_real)
            .bind(&input.incidencias)
            .bind(id_of(&input.contenedor))
            .fetch_one(pool)
            .await?;
        Self::expand_one(pool, Some(row))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update(
        pool: &PgPool,
        id: &DbId,
        input: &RecogidaInput,
    ) -> Result<Option<Recogida>, sqlx::Error> {
        let query = format!(
            "UPDATE recogida SET
                fecha_solicitud = $2,
                fecha_recogida_estimada = $3,
                fecha_recogida_real = $4,
                incidencias = $5,
                id_contenedor = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecogidaRow>(&query)
            .bind(id)
            .bind(input.fecha_solicitud)
            .bind(input.fecha_recogida_estimada)
            .bind(input.fecha_recogida_real)
            .bind(&input.incidencias)
            .bind(id_of(&input.contenedor))
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn delete(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recogida WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
