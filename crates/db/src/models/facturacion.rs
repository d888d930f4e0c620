//! Billing records per owner and waste type.

use std::collections::HashMap;

use residuos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lookup::resolve;
use crate::models::propietario::Propietario;
use crate::models::reference::{DniRef, IdRef};
use crate::models::tipo_residuo::TipoResiduo;

/// A row from the `facturacion` table.
#[derive(Debug, Clone, FromRow)]
pub struct FacturacionRow {
    pub id: DbId,
    pub total: Option<f64>,
    pub dni: Option<String>,
    pub id_tipo_residuo: Option<DbId>,
}

/// A billing record with owner and waste type expanded.
///
/// `total` is caller-supplied; nothing derives it from prices or pickups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facturacion {
    pub id: DbId,
    pub total: Option<f64>,
    pub propietario: Option<Propietario>,
    pub tipo_residuo: Option<TipoResiduo>,
}

/// Body for creating or replacing a billing record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacturacionInput {
    pub total: Option<f64>,
    pub propietario: Option<DniRef>,
    pub tipo_residuo: Option<IdRef>,
}

impl FacturacionRow {
    pub fn into_model(
        self,
        propietarios: &HashMap<String, Propietario>,
        tipos: &HashMap<DbId, TipoResiduo>,
    ) -> Facturacion {
        Facturacion {
            id: self.id,
            total: self.total,
            propietario: resolve(propietarios, self.dni.as_ref()),
            tipo_residuo: resolve(tipos, self.id_tipo_residuo.as_ref()),
        }
    }
}
