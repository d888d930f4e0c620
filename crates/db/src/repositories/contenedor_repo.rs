//! Repository for the `contenedores` table.

use async_trait::async_trait;
use residuos_core::types::DbId;
use sqlx::PgPool;

use crate::lookup::{distinct_keys, index_by};
use crate::models::contenedor::{Contenedor, ContenedorInput, ContenedorRow};
use crate::models::reference::id_of;
use crate::repositories::{CrudRepo, PuntoRecogidaRepo, TipoResiduoRepo};

const COLUMNS: &str = "id, capacidad, id_tipo_residuo, id_punto_recogida";

/// Provides CRUD operations for containers.
pub struct ContenedorRepo;

impl ContenedorRepo {
    /// Load every container whose id is in `ids`, references expanded.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Contenedor>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM contenedores WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, ContenedorRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    /// All containers at one collection point, ordered by id.
    pub async fn list_by_punto_recogida(
        pool: &PgPool,
        punto_recogida_id: DbId,
    ) -> Result<Vec<Contenedor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contenedores WHERE id_punto_recogida = $1 ORDER BY id"
        );
        let rows = sqlx::query_as::<_, ContenedorRow>(&query)
            .bind(punto_recogida_id)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn expand(pool: &PgPool, rows: Vec<ContenedorRow>) -> Result<Vec<Contenedor>, sqlx::Error> {
        let tipo_ids = distinct_keys(rows.iter().map(|r| r.id_tipo_residuo));
        let punto_ids = distinct_keys(rows.iter().map(|r| r.id_punto_recogida));

        let tipos = index_by(TipoResiduoRepo::find_by_ids(pool, &tipo_ids).await?, |t| t.id);
        let puntos = index_by(PuntoRecogidaRepo::find_by_ids(pool, &punto_ids).await?, |p| {
            p.id
        });

        Ok(rows
            .into_iter()
            .map(|row| row.into_model(&tipos, &puntos))
            .collect())
    }

    async fn expand_one(
        pool: &PgPool,
        row: Option<ContenedorRow>,
    ) -> Result<Option<Contenedor>, sqlx::Error> {
        match row {
            Some(row) => Ok(Self::expand(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CrudRepo for ContenedorRepo {
    type Key = DbId;
    type Entity = Contenedor;
    type Input = ContenedorInput;

    const ENTITY: &'static str = "Contenedor";

    async fn list(pool: &PgPool) -> Result<Vec<Contenedor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contenedores ORDER BY id");
        let rows = sqlx::query_as::<_, ContenedorRow>(&query)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn find_by_key(pool: &PgPool, id: &DbId) -> Result<Option<Contenedor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contenedores WHERE id = $1");
        let row = sqlx::query_as::<_, ContenedorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn exists(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM contenedores WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &ContenedorInput) -> Result<Contenedor, sqlx::Error> {
        let query = format!(
            "INSERT INTO contenedores (capacidad, id_tipo_residuo, id_punto_recogida)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContenedorRow>(&query)
            .bind(input.capacidad)
            .bind(id_of(&input.tipo_residuo))
            .bind(id_of(&input.punto_recogida))
            .fetch_one(pool)
            .await?;
        Self::expand_one(pool, Some(row))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update(
        pool: &PgPool,
        id: &DbId,
        input: &ContenedorInput,
    ) -> Result<Option<Contenedor>, sqlx::Error> {
        let query = format!(
            "UPDATE contenedores SET
                capacidad = $2,
                id_tipo_residuo = $3,
                id_punto_recogida = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContenedorRow>(&query)
            .bind(id)
            .bind(input.capacidad)
            .bind(id_of(&input.tipo_residuo))
            .bind(id_of(&input.punto_recogida))
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn delete(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contenedores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
