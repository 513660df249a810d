use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Precedent;

#[derive(Debug)]
pub enum PrecedentRepositoryError {
    DatabaseError(String),
}

impl std::fmt::Display for PrecedentRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrecedentRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for PrecedentRepositoryError {}

/// Append-only precedent log. Rows are never updated; reads return the
/// most recent entries first.
#[async_trait]
pub trait PrecedentRepository: Send + Sync {
    async fn append_batch(
        &self,
        precedents: &[Precedent],
    ) -> Result<(), PrecedentRepositoryError>;
    async fn recent_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Precedent>, PrecedentRepositoryError>;
}
