#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row exists for the given key. `key` is the textual form of either a
    /// generated id or a natural key such as a DNI.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    /// The store rejected the write because of a uniqueness or reference constraint.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Build a [`CoreError::NotFound`] for any displayable key.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
