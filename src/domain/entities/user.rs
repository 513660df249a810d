use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    username: String,
    password_hash: String,
    current_summary: Option<String>,
    current_pdf_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            current_summary: None,
            current_pdf_name: None,
            created_at: Utc::now(),
        }
    }

    pub fn from_parts(
        id: Uuid,
        username: String,
        password_hash: String,
        current_summary: Option<String>,
        current_pdf_name: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            current_summary,
            current_pdf_name,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn current_summary(&self) -> Option<&str> {
        self.current_summary.as_deref()
    }

    pub fn current_pdf_name(&self) -> Option<&str> {
        self.current_pdf_name.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrites the current document summary and name. At most one
    /// current document per user; uploads replace, never version.
    pub fn set_current_document(&mut self, summary: String, pdf_name: String) {
        self.current_summary = Some(summary);
        self.current_pdf_name = Some(pdf_name);
    }

    pub fn has_document(&self) -> bool {
        self.current_summary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_document() {
        let user = User::new("a@example.com".to_string(), "hash".to_string());
        assert!(!user.has_document());
        assert_eq!(user.username(), "a@example.com");
    }

    #[test]
    fn test_set_current_document_overwrites() {
        let mut user = User::new("a@example.com".to_string(), "hash".to_string());
        user.set_current_document("first summary".to_string(), "one.pdf".to_string());
        user.set_current_document("second summary".to_string(), "two.pdf".to_string());

        assert_eq!(user.current_summary(), Some("second summary"));
        assert_eq!(user.current_pdf_name(), Some("two.pdf"));
    }
}
