//! The CRUD contract shared by every resource.

use std::fmt::Display;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;

/// Find-all, find-by-key, insert, full replace and delete for one table.
///
/// Implementors are zero-sized repository structs. `Key` is a generated
/// [`DbId`](residuos_core::types::DbId) for every entity except owners, which
/// use their DNI.
#[async_trait]
pub trait CrudRepo: Send + Sync + 'static {
    /// Key as it appears in the URL path.
    type Key: DeserializeOwned + Display + Send + Sync + 'static;
    /// Entity as returned to callers, references expanded.
    type Entity: Serialize + Send + 'static;
    /// Request body for create and update.
    type Input: DeserializeOwned + Send + Sync + 'static;

    /// Entity name used in error messages and logs.
    const ENTITY: &'static str;

    /// All rows, ordered by key.
    async fn list(pool: &PgPool) -> Result<Vec<Self::Entity>, sqlx::Error>;

    async fn find_by_key(pool: &PgPool, key: &Self::Key)
        -> Result<Option<Self::Entity>, sqlx::Error>;

    async fn exists(pool: &PgPool, key: &Self::Key) -> Result<bool, sqlx::Error>;

    /// Insert a new row and return it. Generated keys are assigned by the store.
    async fn create(pool: &PgPool, input: &Self::Input) -> Result<Self::Entity, sqlx::Error>;

    /// Overwrite every non-key column of the row at `key`.
    ///
    /// Returns `None`, without touching the table, if no such row exists.
    async fn update(
        pool: &PgPool,
        key: &Self::Key,
        input: &Self::Input,
    ) -> Result<Option<Self::Entity>, sqlx::Error>;

    /// Delete the row at `key`. Returns `true` if a row was removed.
    async fn delete(pool: &PgPool, key: &Self::Key) -> Result<bool, sqlx::Error>;
}
