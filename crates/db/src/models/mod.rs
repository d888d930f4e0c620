//! Entity models and request bodies.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as returned by the API, with references
//!   expanded into nested entities
//! - A `FromRow` row struct for tables that carry foreign keys, plus the
//!   mapping function that turns a row into the entity
//! - A `Deserialize` input struct shared by create and full-replace update

pub mod contenedor;
pub mod facturacion;
pub mod precio;
pub mod propietario;
pub mod punto_recogida;
pub mod recogida;
pub mod reference;
pub mod timestamp;
pub mod tipo_residuo;
