use async_trait::async_trait;
use pgvector::Vector;
use uuid::Uuid;

use crate::domain::entities::DocumentChunk;

#[derive(Debug)]
pub enum ChunkRepositoryError {
    DatabaseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ChunkRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ChunkRepositoryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ChunkRepositoryError {}

#[derive(Debug, Clone)]
pub struct ChunkSearchResult {
    pub chunk: DocumentChunk,
    pub similarity_score: f32,
}

/// Per-user vector index over the chunks of the most recently uploaded
/// document.
#[async_trait]
pub trait ChunkRepository: Send + Sync {
    /// Deletes the user's existing chunks and inserts the new set in one
    /// transaction. Re-upload replaces, never merges.
    async fn replace_for_user(
        &self,
        user_id: Uuid,
        chunks: &[DocumentChunk],
    ) -> Result<(), ChunkRepositoryError>;

    async fn similarity_search_for_user(
        &self,
        user_id: Uuid,
        query_vector: &Vector,
        limit: i32,
    ) -> Result<Vec<ChunkSearchResult>, ChunkRepositoryError>;

    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, ChunkRepositoryError>;
}
