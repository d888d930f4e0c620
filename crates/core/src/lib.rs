//! Shared types and the domain error for the waste-collection backend.

pub mod error;
pub mod types;
