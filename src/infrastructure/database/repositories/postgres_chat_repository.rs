use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::ChatMessage;
use crate::domain::repositories::{chat_repository::ChatRepositoryError, ChatRepository};
use crate::infrastructure::database::models::{ChatMessageModel, NewChatMessageModel};
use crate::infrastructure::database::schema::chat_messages::dsl::*;
use crate::infrastructure::database::{get_connection_from_pool, DbPool};

pub struct PostgresChatRepository {
    pool: DbPool,
}

impl PostgresChatRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn append(&self, chat_message: &ChatMessage) -> Result<(), ChatRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        let new_message = NewChatMessageModel::from(chat_message);

        diesel::insert_into(chat_messages)
            .values(&new_message)
            .execute(&mut conn)
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn history_for_user(
        &self,
        for_user: Uuid,
    ) -> Result<Vec<ChatMessage>, ChatRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        let models = chat_messages
            .filter(user_id.eq(for_user))
            .order(created_at.asc())
            .load::<ChatMessageModel>(&mut conn)
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(ChatMessage::from).collect())
    }
}
