//! Waste-type classification.

use residuos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tipo_residuo` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoResiduo {
    pub id: DbId,
    pub descripcion: Option<String>,
}

/// Body for creating or replacing a waste type. A body `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoResiduoInput {
    pub descripcion: Option<String>,
}
