//! Repository for the `propietario` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::propietario::{CascadeDeleteReport, Propietario, PropietarioInput};
use crate::repositories::CrudRepo;

const COLUMNS: &str = "dni, nombre, telefono, email";

/// Provides CRUD operations for owners, keyed by DNI.
pub struct PropietarioRepo;

impl PropietarioRepo {
    /// Load every owner whose DNI is in `dnis`. Unknown DNIs are skipped.
    pub async fn find_by_dnis(pool: &PgPool, dnis: &[String]) -> Result<Vec<Propietario>, sqlx::Error> {
        if dnis.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM propietario WHERE dni = ANY($1)");
        sqlx::query_as::<_, Propietario>(&query)
            .bind(dnis)
            .fetch_all(pool)
            .await
    }

    /// Delete an owner together with everything that hangs off it.
    ///
    /// Runs in one transaction, children first: pickups of the owner's
    /// containers, containers at the owner's collection points, the points
    /// themselves, the owner's billing records and finally the owner.
    /// Returns `None` (and rolls back) if the owner does not exist.
    pub async fn cascade_delete(
        pool: &PgPool,
        dni: &str,
    ) -> Result<Option<CascadeDeleteReport>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let recogidas = sqlx::query(
            "DELETE FROM recogida WHERE id_contenedor IN (
                 SELECT c.id FROM contenedores c
                 JOIN punto_recogida p ON p.id = c.id_punto_recogida
                 WHERE p.dni = $1
             )",
        )
        .bind(dni)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let contenedores = sqlx::query(
            "DELETE FROM contenedores WHERE id_punto_recogida IN (
                 SELECT id FROM punto_recogida WHERE dni = $1
             )",
        )
        .bind(dni)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let puntos_recogida = sqlx::query("DELETE FROM punto_recogida WHERE dni = $1")
            .bind(dni)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let facturaciones = sqlx::query("DELETE FROM facturacion WHERE dni = $1")
            .bind(dni)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let owner = sqlx::query("DELETE FROM propietario WHERE dni = $1")
            .bind(dni)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if owner == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        tracing::debug!(
            dni,
            recogidas,
            contenedores,
            puntos_recogida,
            facturaciones,
            "Owner cascade delete committed"
        );
        Ok(Some(CascadeDeleteReport {
            recogidas,
            contenedores,
            puntos_recogida,
            facturaciones,
        }))
    }
}

#[async_trait]
impl CrudRepo for PropietarioRepo {
    type Key = String;
    type Entity = Propietario;
    type Input = PropietarioInput;

    const ENTITY: &'static str = "Propietario";

    async fn list(pool: &PgPool) -> Result<Vec<Propietario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM propietario ORDER BY dni");
        sqlx::query_as::<_, Propietario>(&query).fetch_all(pool).await
    }

    async fn find_by_key(pool: &PgPool, dni: &String) -> Result<Option<Propietario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM propietario WHERE dni = $1");
        sqlx::query_as::<_, Propietario>(&query)
            .bind(dni)
            .fetch_optional(pool)
            .await
    }

    async fn exists(pool: &PgPool, dni: &String) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM propietario WHERE dni = $1)")
            .bind(dni)
            .fetch_one(pool)
            .await
    }

    /// Insert an owner under the caller-supplied DNI.
    ///
    /// There is no pre-check: a duplicate DNI surfaces as the store's
    /// primary-key violation.
    async fn create(pool: &PgPool, input: &PropietarioInput) -> Result<Propietario, sqlx::Error> {
        let query = format!(
            "INSERT INTO propietario (dni, nombre, telefono, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Propietario>(&query)
            .bind(&input.dni)
            .bind(&input.nombre)
            .bind(input.telefono)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Replace an owner's contact fields. `input.dni` is ignored.
    async fn update(
        pool: &PgPool,
        dni: &String,
        input: &PropietarioInput,
    ) -> Result<Option<Propietario>, sqlx::Error> {
        let query = format!(
            "UPDATE propietario SET
                nombre = $2,
                telefono = $3,
                email = $4
             WHERE dni = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Propietario>(&query)
            .bind(dni)
            .bind(&input.nombre)
            .bind(input.telefono)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, dni: &String) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM propietario WHERE dni = $1")
            .bind(dni)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
