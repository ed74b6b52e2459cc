use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Store failures are not represented here; they stay as `sqlx::Error` and
/// are wrapped at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
