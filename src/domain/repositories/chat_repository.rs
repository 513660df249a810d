use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::ChatMessage;

#[derive(Debug)]
pub enum ChatRepositoryError {
    DatabaseError(String),
}

impl std::fmt::Display for ChatRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ChatRepositoryError {}

/// Append-only chat log, read back in timestamp order.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn append(&self, message: &ChatMessage) -> Result<(), ChatRepositoryError>;
    async fn history_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ChatMessage>, ChatRepositoryError>;
}
