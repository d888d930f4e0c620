//! Repository for the `precio` table.

use async_trait::async_trait;
use residuos_core::types::DbId;
use sqlx::PgPool;

use crate::lookup::{distinct_keys, index_by};
use crate::models::precio::{Precio, PrecioInput, PrecioRow};
use crate::models::reference::id_of;
use crate::repositories::{CrudRepo, TipoResiduoRepo};

const COLUMNS: &str = "id, fecha_inicio, fecha_fin, valor, id_tipo_residuo";

/// Provides CRUD operations for prices.
pub struct PrecioRepo;

impl PrecioRepo {
    /// All prices for one waste type, ordered by id.
    pub async fn list_by_tipo_residuo(
        pool: &PgPool,
        tipo_residuo_id: DbId,
    ) -> Result<Vec<Precio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM precio WHERE id_tipo_residuo = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, PrecioRow>(&query)
            .bind(tipo_residuo_id)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn expand(pool: &PgPool, rows: Vec<PrecioRow>) -> Result<Vec<Precio>, sqlx::Error> {
        let tipo_ids = distinct_keys(rows.iter().map(|r| r.id_tipo_residuo));
        let tipos = index_by(TipoResiduoRepo::find_by_ids(pool, &tipo_ids).await?, |t| t.id);
        Ok(rows.into_iter().map(|row| row.into_model(&tipos)).collect())
    }

    async fn expand_one(pool: &PgPool, row: Option<PrecioRow>) -> Result<Option<Precio>, sqlx::Error> {
        match row {
            Some(row) => Ok(Self::expand(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CrudRepo for PrecioRepo {
    type Key = DbId;
    type Entity = Precio;
    type Input = PrecioInput;

    const ENTITY: &'static str = "Precio";

    async fn list(pool: &PgPool) -> Result<Vec<Precio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM precio ORDER BY id");
        let rows = sqlx::query_as::<_, PrecioRow>(&query).fetch_all(pool).await?;
        Self::expand(pool, rows).await
    }

    async fn find_by_key(pool: &PgPool, id: &DbId) -> Result<Option<Precio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM precio WHERE id = $1");
        let row = sqlx::query_as::<_, PrecioRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn exists(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM precio WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &PrecioInput) -> Result<Precio, sqlx::Error> {
        let query = format!(
            "INSERT INTO precio (fecha_inicio, fecha_fin, valor, id_tipo_residuo)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PrecioRow>(&query)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.valor)
            .bind(id_of(&input.tipo_residuo))
            .fetch_one(pool)
            .await?;
        Self::expand_one(pool, Some(row))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update(
        pool: &PgPool,
        id: &DbId,
        input: &PrecioInput,
    ) -> Result<Option<Precio>, sqlx::Error> {
        let query = format!(
            "UPDATE precio SET
                fecha_inicio = $2,
                fecha_fin = $3,
                valor = $4,
                id_tipo_residuo = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PrecioRow>(&query)
            .bind(id)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .bind(input.valor)
            .bind(id_of(&input.tipo_residuo))
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn delete(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM precio WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
