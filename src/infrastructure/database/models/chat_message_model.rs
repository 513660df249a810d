use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::{ChatMessage, Sender};
use crate::infrastructure::database::schema::chat_messages;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChatMessageModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sender: String,
    pub message: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewChatMessageModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sender: String,
    pub message: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&ChatMessage> for NewChatMessageModel {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id(),
            user_id: message.user_id(),
            sender: message.sender().as_str().to_string(),
            message: message.message().to_string(),
            source: message.source().map(str::to_string),
            created_at: message.created_at(),
        }
    }
}

impl From<ChatMessageModel> for ChatMessage {
    fn from(model: ChatMessageModel) -> Self {
        ChatMessage::from_parts(
            model.id,
            model.user_id,
            Sender::parse(&model.sender),
            model.message,
            model.source,
            model.created_at,
        )
    }
}
