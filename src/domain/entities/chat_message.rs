use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value == "user" {
            Sender::User
        } else {
            Sender::Assistant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: Uuid,
    user_id: Uuid,
    sender: Sender,
    message: String,
    source: Option<String>,
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(user_id: Uuid, sender: Sender, message: String, source: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            sender,
            message,
            source,
            created_at: Utc::now(),
        }
    }

    pub fn from_parts(
        id: Uuid,
        user_id: Uuid,
        sender: Sender,
        message: String,
        source: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            sender,
            message,
            source,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_round_trip() {
        assert_eq!(Sender::parse("user"), Sender::User);
        assert_eq!(Sender::parse("assistant"), Sender::Assistant);
        assert_eq!(Sender::User.as_str(), "user");
    }
}
