use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::FactCheckRecord;

#[derive(Debug)]
pub enum FactCheckRepositoryError {
    DatabaseError(String),
}

impl std::fmt::Display for FactCheckRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactCheckRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for FactCheckRepositoryError {}

#[async_trait]
pub trait FactCheckRepository: Send + Sync {
    async fn append_batch(
        &self,
        records: &[FactCheckRecord],
    ) -> Result<(), FactCheckRepositoryError>;
    /// Full fact-check history for a user, newest first.
    async fn history_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FactCheckRecord>, FactCheckRepositoryError>;
}
