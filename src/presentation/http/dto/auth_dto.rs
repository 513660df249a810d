use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::use_cases::login::LoginResponse;
use crate::domain::entities::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct SignupRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponseDto {
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageDto {
    pub sender: String,
    pub message: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            sender: message.sender().as_str().to_string(),
            message: message.message().to_string(),
            source: message.source().map(str::to_string),
            created_at: message.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub summary: Option<String>,
    pub pdf_name: Option<String>,
    pub chat_history: Vec<ChatMessageDto>,
    pub precedents: Vec<serde_json::Value>,
}

impl From<LoginResponse> for LoginResponseDto {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.user_id,
            username: response.username,
            summary: response.summary,
            pdf_name: response.pdf_name,
            chat_history: response.chat_history.iter().map(ChatMessageDto::from).collect(),
            precedents: response
                .precedents
                .iter()
                .filter_map(|p| p.raw_json().cloned())
                .collect(),
        }
    }
}
