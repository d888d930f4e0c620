//! Containers placed at collection points.

use std::collections::HashMap;

use residuos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lookup::resolve;
use crate::models::punto_recogida::PuntoRecogida;
use crate::models::reference::IdRef;
use crate::models::tipo_residuo::TipoResiduo;

/// A row from the `contenedores` table.
#[derive(Debug, Clone, FromRow)]
pub struct ContenedorRow {
    pub id: DbId,
    pub capacidad: Option<i32>,
    pub id_tipo_residuo: Option<DbId>,
    pub id_punto_recogida: Option<DbId>,
}

/// A container with its waste type and collection point expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contenedor {
    pub id: DbId,
    /// Litres.
    pub capacidad: Option<i32>,
    pub tipo_residuo: Option<TipoResiduo>,
    pub punto_recogida: Option<PuntoRecogida>,
}

/// Body for creating or replacing a container.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContenedorInput {
    pub capacidad: Option<i32>,
    pub tipo_residuo: Option<IdRef>,
    pub punto_recogida: Option<IdRef>,
}

impl ContenedorRow {
    pub fn into_model(
        self,
        tipos: &HashMap<DbId, TipoResiduo>,
        puntos: &HashMap<DbId, PuntoRecogida>,
    ) -> Contenedor {
        Contenedor {
            id: self.id,
            capacidad: self.capacidad,
            tipo_residuo: resolve(tipos, self.id_tipo_residuo.as_ref()),
            punto_recogida: resolve(puntos, self.id_punto_recogida.as_ref()),
        }
    }
}
