use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;

#[derive(Debug)]
pub enum UserRepositoryError {
    NotFound(Uuid),
    DuplicateUsername(String),
    DatabaseError(String),
}

impl std::fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRepositoryError::NotFound(id) => write!(f, "User not found: {}", id),
            UserRepositoryError::DuplicateUsername(name) => {
                write!(f, "Username already registered: {}", name)
            }
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;
    /// Overwrites the user's current document summary and pdf name.
    async fn update_current_document(
        &self,
        id: Uuid,
        summary: &str,
        pdf_name: &str,
    ) -> Result<(), UserRepositoryError>;
}
