pub mod crud;
pub mod propietario;
pub mod scoped;
