//! Repository for the `facturacion` table.

use async_trait::async_trait;
use residuos_core::types::DbId;
use sqlx::PgPool;

use crate::lookup::{distinct_keys, index_by};
use crate::models::facturacion::{Facturacion, FacturacionInput, FacturacionRow};
use crate::models::reference::{dni_of, id_of};
use crate::repositories::{CrudRepo, PropietarioRepo, TipoResiduoRepo};

const COLUMNS: &str = "id, total, dni, id_tipo_residuo";

/// Provides CRUD operations for billing records.
pub struct FacturacionRepo;

impl FacturacionRepo {
    /// All billing records of one owner, ordered by id.
    pub async fn list_by_propietario(
        pool: &PgPool,
        dni: &str,
    ) -> Result<Vec<Facturacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facturacion WHERE dni = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, FacturacionRow>(&query)
            .bind(dni)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn expand(
        pool: &PgPool,
        rows: Vec<FacturacionRow>,
    ) -> Result<Vec<Facturacion>, sqlx::Error> {
        let dnis = distinct_keys(rows.iter().map(|r| r.dni.clone()));
        let tipo_ids = distinct_keys(rows.iter().map(|r| r.id_tipo_residuo));

        let propietarios = index_by(PropietarioRepo::find_by_dnis(pool, &dnis).await?, |p| {
            p.dni.clone()
        });
        let tipos = index_by(TipoResiduoRepo::find_by_ids(pool, &tipo_ids).await?, |t| t.id);

        Ok(rows
            .into_iter()
            .map(|row| row.into_model(&propietarios, &tipos))
            .collect())
    }

    async fn expand_one(
        pool: &PgPool,
        row: Option<FacturacionRow>,
    ) -> Result<Option<Facturacion>, sqlx::Error> {
        match row {
            Some(row) => Ok(Self::expand(pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CrudRepo for FacturacionRepo {
    type Key = DbId;
    type Entity = Facturacion;
    type Input = FacturacionInput;

    const ENTITY: &'static str = "Facturacion";

    async fn list(pool: &PgPool) -> Result<Vec<Facturacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facturacion ORDER BY id");
        let rows = sqlx::query_as::<_, FacturacionRow>(&query)
            .fetch_all(pool)
            .await?;
        Self::expand(pool, rows).await
    }

    async fn find_by_key(pool: &PgPool, id: &DbId) -> Result<Option<Facturacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facturacion WHERE id = $1");
        let row = sqlx::query_as::<_, FacturacionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn exists(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM facturacion WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &FacturacionInput) -> Result<Facturacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO facturacion (total, dni, id_tipo_residuo)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FacturacionRow>(&query)
            .bind(input.total)
            .bind(dni_of(&input.propietario))
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
        input: &FacturacionInput,
    ) -> Result<Option<Facturacion>, sqlx::Error> {
        let query = format!(
            "UPDATE facturacion SET
                total = $2,
                dni = $3,
                id_tipo_residuo = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FacturacionRow>(&query)
            .bind(id)
            .bind(input.total)
            .bind(dni_of(&input.propietario))
            .bind(id_of(&input.tipo_residuo))
            .fetch_optional(pool)
            .await?;
        Self::expand_one(pool, row).await
    }

    async fn delete(pool: &PgPool, id: &DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM facturacion WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
