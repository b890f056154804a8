use crate::types::DbId;

/// Domain failures shared by the persistence and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No `entity` row has primary key `id`.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// A request payload broke a field rule (length, email format, ...).
    #[error("invalid input: {0}")]
    Validation(String),

    /// The write would duplicate a unique value such as a user's email.
    #[error("conflicting record: {0}")]
    Conflict(String),

    #[error("internal failure: {0}")]
    Internal(String),
}
