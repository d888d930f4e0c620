//! Reference objects accepted in request bodies.
//!
//! A request points at a related row with a nested object carrying only its
//! key, e.g. `{"tipoResiduo": {"id": 1}}`. Any other fields the caller sends
//! inside the object are ignored.

use residuos_core::types::DbId;
use serde::Deserialize;

/// Reference to an entity with a generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IdRef {
    pub id: DbId,
}

/// Reference to a [`Propietario`](super::propietario::Propietario) by DNI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DniRef {
    pub dni: String,
}

/// Foreign-key value to bind for an optional id reference.
pub fn id_of(reference: &Option<IdRef>) -> Option<DbId> {
    reference.as_ref().map(|r| r.id)
}

/// Foreign-key value to bind for an optional DNI reference.
pub fn dni_of(reference: &Option<DniRef>) -> Option<&str> {
    reference.as_ref().map(|r| r.dni.as_str())
}
