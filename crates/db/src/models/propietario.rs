//! Collection-point owners, keyed by their national identity document.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `propietario` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Propietario {
    pub dni: String,
    pub nombre: Option<String>,
    pub telefono: Option<i64>,
    pub email: Option<String>,
}

/// Body for creating or replacing an owner.
///
/// `dni` is the natural key: it is bound as-is on create, so a missing or
/// empty value is refused by the store, and ignored on update, where the
/// path key wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropietarioInput {
    pub dni: Option<String>,
    pub nombre: Option<String>,
    pub telefono: Option<i64>,
    pub email: Option<String>,
}

/// Rows removed by an owner cascade delete, per table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeDeleteReport {
    pub recogidas: u64,
    pub contenedores: u64,
    pub puntos_recogida: u64,
    pub facturaciones: u64,
}
