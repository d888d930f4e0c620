//! Pickup events for containers.

use std::collections::HashMap;

use residuos_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lookup::resolve;
use crate::models::contenedor::Contenedor;
use crate::models::reference::IdRef;
use crate::models::timestamp::deserialize_opt;

/// A row from the `recogida` table.
#[derive(Debug, Clone, FromRow)]
pub struct RecogidaRow {
    pub id: DbId,
    pub fecha_solicitud: Option<Timestamp>,
    pub fecha_recogida_estimada: Option<Timestamp>,
    pub fecha_recogida_real: Option<Timestamp>,
    pub incidencias: Option<String>,
    pub id_contenedor: Option<DbId>,
}

/// A pickup with its container expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recogida {
    pub id: DbId,
    pub fecha_solicitud: Option<Timestamp>,
    pub fecha_recogida_estimada: Option<Timestamp>,
    /// `None` until the pickup has happened.
    pub fecha_recogida_real: Option<Timestamp>,
    pub incidencias: Option<String>,
    pub contenedor: Option<Contenedor>,
}

/// Body for creating or replacing a pickup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecogidaInput {
    #[serde(default, deserialize_with = "deserialize_opt")]
    pub fecha_solicitud: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_opt")]
    pub fecha_recogida_estimada: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_opt")]
    pub fecha_recogida_real: Option<Timestamp>,
    pub incidencias: Option<String>,
    pub contenedor: Option<IdRef>,
}

impl RecogidaRow {
    pub fn into_model(self, contenedores: &HashMap<DbId, Contenedor>) -> Recogida {
        Recogida {
            contenedor: resolve(contenedores, self.id_contenedor.as_ref()),
            id: self.id,
            fecha_solicitud: self.fecha_solicitud,
            fecha_recogida_estimada: self.fecha_recogida_estimada,
            fecha_recogida_real: self.fecha_recogida_real,
            incidencias: self.incidencias,
        }
    }
}
