use std::sync::Arc;

use uuid::Uuid;

use crate::application::services::credentials::{
    hash_password, validate_email, validate_password_strength, CredentialError,
};
use crate::domain::entities::User;
use crate::domain::repositories::{user_repository::UserRepositoryError, UserRepository};

#[derive(Debug)]
pub enum SignupError {
    InvalidEmail,
    WeakPassword(String),
    UsernameTaken(String),
    RepositoryError(String),
    HashingError(String),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupError::InvalidEmail => write!(f, "Invalid email address"),
            SignupError::WeakPassword(msg) => write!(f, "{}", msg),
            SignupError::UsernameTaken(name) => write!(f, "Email already registered: {}", name),
            SignupError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            SignupError::HashingError(msg) => write!(f, "Password hashing error: {}", msg),
        }
    }
}

impl std::error::Error for SignupError {}

impl From<CredentialError> for SignupError {
    fn from(error: CredentialError) -> Self {
        match error {
            CredentialError::InvalidEmail => SignupError::InvalidEmail,
            CredentialError::WeakPassword(msg) => SignupError::WeakPassword(msg),
            CredentialError::HashingError(msg) => SignupError::HashingError(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SignupResponse {
    pub user_id: Uuid,
}

/// Registers a new account. Usernames are email addresses.
pub struct SignupUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl SignupUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn execute(&self, request: SignupRequest) -> Result<SignupResponse, SignupError> {
        let username = request.username.trim().to_lowercase();

        validate_email(&username)?;
        validate_password_strength(&request.password)?;

        let existing = self
            .user_repository
            .find_by_username(&username)
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(SignupError::UsernameTaken(username));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(username, password_hash);
        let user_id = user.id();

        self.user_repository.save(&user).await.map_err(|e| match e {
            UserRepositoryError::DuplicateUsername(name) => SignupError::UsernameTaken(name),
            other => SignupError::RepositoryError(other.to_string()),
        })?;

        tracing::info!("Registered new user {}", user_id);
        Ok(SignupResponse { user_id })
    }
}
