//! Price records per waste type.

use std::collections::HashMap;

use residuos_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lookup::resolve;
use crate::models::reference::IdRef;
use crate::models::timestamp::deserialize_opt;
use crate::models::tipo_residuo::TipoResiduo;

/// A row from the `precio` table.
#[derive(Debug, Clone, FromRow)]
pub struct PrecioRow {
    pub id: DbId,
    pub fecha_inicio: Option<Timestamp>,
    pub fecha_fin: Option<Timestamp>,
    pub valor: Option<f64>,
    pub id_tipo_residuo: Option<DbId>,
}

/// A price with its waste type expanded.
///
/// The validity range is stored as given; ordering and overlap with other
/// prices of the same waste type are not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Precio {
    pub id: DbId,
    pub fecha_inicio: Option<Timestamp>,
    pub fecha_fin: Option<Timestamp>,
    pub valor: Option<f64>,
    pub tipo_residuo: Option<TipoResiduo>,
}

/// Body for creating or replacing a price.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecioInput {
    #[serde(default, deserialize_with = "deserialize_opt")]
    pub fecha_inicio: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_opt")]
    pub fecha_fin: Option<Timestamp>,
    pub valor: Option<f64>,
    pub tipo_residuo: Option<IdRef>,
}

impl PrecioRow {
    pub fn into_model(self, tipos: &HashMap<DbId, TipoResiduo>) -> Precio {
        Precio {
            tipo_residuo: resolve(tipos, self.id_tipo_residuo.as_ref()),
            id: self.id,
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            valor: self.valor,
        }
    }
}
