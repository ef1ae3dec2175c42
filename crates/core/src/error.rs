use crate::types::DbId;
use crate::validation::Violation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<Violation> for CoreError {
    fn from(violation: Violation) -> Self {
        CoreError::Validation(violation.into_message())
    }
}
