//! Collection points and their owner reference.

use std::collections::HashMap;

use residuos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lookup::resolve;
use crate::models::propietario::Propietario;
use crate::models::reference::DniRef;

/// A row from the `punto_recogida` table.
#[derive(Debug, Clone, FromRow)]
pub struct PuntoRecogidaRow {
    pub id: DbId,
    pub localidad: Option<String>,
    pub cp: Option<i32>,
    pub provincia: Option<String>,
    pub direccion: Option<String>,
    pub horario: Option<String>,
    pub tipo: Option<String>,
    pub dni: Option<String>,
}

/// A collection point with its owner expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuntoRecogida {
    pub id: DbId,
    pub localidad: Option<String>,
    pub cp: Option<i32>,
    pub provincia: Option<String>,
    pub direccion: Option<String>,
    /// Free-form slot code; the client sends `M`, `T` or `N`.
    pub horario: Option<String>,
    /// Waste source (household, supermarket, ...), stored verbatim.
    pub tipo: Option<String>,
    pub propietario: Option<Propietario>,
}

/// Body for creating or replacing a collection point.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuntoRecogidaInput {
    pub localidad: Option<String>,
    pub cp: Option<i32>,
    pub provincia: Option<String>,
    pub direccion: Option<String>,
    pub horario: Option<String>,
    pub tipo: Option<String>,
    pub propietario: Option<DniRef>,
}

impl PuntoRecogidaRow {
    pub fn into_model(self, propietarios: &HashMap<String, Propietario>) -> PuntoRecogida {
        PuntoRecogida {
            propietario: resolve(propietarios, self.dni.as_ref()),
            id: self.id,
            localidad: self.localidad,
            cp: self.cp,
            provincia: self.provincia,
            direccion: self.direccion,
            horario: self.horario,
            tipo: self.tipo,
        }
    }
}
