//! Repository for the `tipo_residuo` table.

use async_trait::async_trait;
use residuos_core::types::DbId;
use sqlx::PgPool;

use crate::models::tipo_residuo::{TipoResiduo, TipoResiduoInput};
use crate::repositories::CrudRepo;

const COLUMNS: &str = "id, descripcion";

/// Provides CRUD operations for waste types.
pub struct TipoResiduoRepo;

impl TipoResiduoRepo {
    /// Load every waste type whose id is in `ids`. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<TipoResiduo>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM tipo_residuo WHERE id = ANY($1)");
        sqlx::query_as::<_, TipoResiduo>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}

#[async_trait]
impl CrudRepo for TipoResiduoRepo {
    type Key = DbId;
    type Entity = TipoResiduo;
    type Input = TipoResiduoInput;

    const ENTITY: &'static str = "TipoResiduo";

    async fn list(pool: &PgPool) -> Result<Vec<TipoResiduo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_residuo ORDER BY id");
        sqlx::query_as::<_, TipoResiduo>(&query).fetch_all(pool).await
    }

    async fn find_by_key(pool: &PgPool, id: &DbId) -> Result<Option<TipoResiduo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipo_residuo WHERE id = $1");
        sqlx::query_as::<_, TipoResiduo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn exists(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tipo_residuo WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &TipoResiduoInput) -> Result<TipoResiduo, sqlx::Error> {
        let query = format!(
            "INSERT INTO tipo_residuo (descripcion)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TipoResiduo>(&query)
            .bind(&input.descripcion)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: &DbId,
        input: &TipoResiduoInput,
    ) -> Result<Option<TipoResiduo>, sqlx::Error> {
        let query = format!(
            "UPDATE tipo_residuo SET descripcion = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TipoResiduo>(&query)
            .bind(id)
            .bind(&input.descripcion)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tipo_residuo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
