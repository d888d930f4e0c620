//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. The five CRUD operations every
//! resource shares are expressed through the [`CrudRepo`] trait so the HTTP
//! layer can serve all of them with one generic handler set.

pub mod contenedor_repo;
pub mod crud;
pub mod facturacion_repo;
pub mod precio_repo;
pub mod propietario_repo;
pub mod punto_recogida_repo;
pub mod recogida_repo;
pub mod tipo_residuo_repo;

pub use contenedor_repo::ContenedorRepo;
pub use crud::CrudRepo;
pub use facturacion_repo::FacturacionRepo;
pub use precio_repo::PrecioRepo;
pub use propietario_repo::PropietarioRepo;
pub use punto_recogida_repo::PuntoRecogidaRepo;
pub use recogida_repo::RecogidaRepo;
pub use tipo_residuo_repo::TipoResiduoRepo;
