use std::sync::Arc;

use uuid::Uuid;

use crate::application::services::credentials::verify_password;
use crate::application::services::TokenService;
use crate::domain::entities::{ChatMessage, Precedent};
use crate::domain::repositories::{ChatRepository, PrecedentRepository, UserRepository};

/// Number of stored precedents restored into the session on login.
const RESTORED_PRECEDENT_LIMIT: i64 = 50;

#[derive(Debug)]
pub enum LoginError {
    InvalidCredentials,
    RepositoryError(String),
    TokenError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            LoginError::TokenError(msg) => write!(f, "Token error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Everything the client needs to restore its session in one response.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub summary: Option<String>,
    pub pdf_name: Option<String>,
    pub chat_history: Vec<ChatMessage>,
    pub precedents: Vec<Precedent>,
}

pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
    chat_repository: Arc<dyn ChatRepository>,
    precedent_repository: Arc<dyn PrecedentRepository>,
    token_service: Arc<TokenService>,
}

impl LoginUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        chat_repository: Arc<dyn ChatRepository>,
        precedent_repository: Arc<dyn PrecedentRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            chat_repository,
            precedent_repository,
            token_service,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let username = request.username.trim().to_lowercase();

        let user = self
            .user_repository
            .find_by_username(&username)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        if !verify_password(&request.password, user.password_hash()) {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(user.id())
            .map_err(|e| LoginError::TokenError(e.to_string()))?;

        let chat_history = self
            .chat_repository
            .history_for_user(user.id())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let precedents = self
            .precedent_repository
            .recent_for_user(user.id(), RESTORED_PRECEDENT_LIMIT)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        tracing::info!("User {} logged in", user.id());

        Ok(LoginResponse {
            token,
            user_id: user.id(),
            username: user.username().to_string(),
            summary: user.current_summary().map(str::to_string),
            pdf_name: user.current_pdf_name().map(str::to_string),
            chat_history,
            precedents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::services::credentials::hash_password;
    use crate::domain::entities::User;
    use crate::domain::repositories::chat_repository::ChatRepositoryError;
    use crate::domain::repositories::precedent_repository::PrecedentRepositoryError;
    use crate::domain::repositories::user_repository::UserRepositoryError;

    struct OneUser(User);

    #[async_trait]
    impl UserRepository for OneUser {
        async fn save(&self, _user: &User) -> Result<(), UserRepositoryError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            Ok(Some(self.0.clone()))
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            if username == self.0.username() {
                Ok(Some(self.0.clone()))
            } else {
                Ok(None)
            }
        }

        async fn update_current_document(
            &self,
            _id: Uuid,
            _summary: &str,
            _pdf_name: &str,
        ) -> Result<(), UserRepositoryError> {
            Ok(())
        }
    }

    struct EmptyChat;

    #[async_trait]
    impl ChatRepository for EmptyChat {
        async fn append(&self, _message: &ChatMessage) -> Result<(), ChatRepositoryError> {
            Ok(())
        }

        async fn history_for_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<ChatMessage>, ChatRepositoryError> {
            Ok(Vec::new())
        }
    }

    struct EmptyPrecedents;

    #[async_trait]
    impl PrecedentRepository for EmptyPrecedents {
        async fn append_batch(
            &self,
            _precedents: &[Precedent],
        ) -> Result<(), PrecedentRepositoryError> {
            Ok(())
        }

        async fn recent_for_user(
            &self,
            _user_id: Uuid,
            _limit: i64,
        ) -> Result<Vec<Precedent>, PrecedentRepositoryError> {
            Ok(Vec::new())
        }
    }

    fn use_case_with_user(password: &str) -> (LoginUseCase, Uuid) {
        let hash = hash_password(password).unwrap();
        let user = User::new("user@example.com".to_string(), hash);
        let user_id = user.id();
        let use_case = LoginUseCase::new(
            Arc::new(OneUser(user)),
            Arc::new(EmptyChat),
            Arc::new(EmptyPrecedents),
            Arc::new(TokenService::new("test-secret")),
        );
        (use_case, user_id)
    }

    #[tokio::test]
    async fn test_login_returns_verifiable_token() {
        let (use_case, user_id) = use_case_with_user("Str0ng!pass");

        let response = use_case
            .execute(LoginRequest {
                username: "user@example.com".to_string(),
                password: "Str0ng!pass".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user_id, user_id);
        let verified = TokenService::new("test-secret")
            .verify(&response.token)
            .unwrap();
        assert_eq!(verified, user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let (use_case, _) = use_case_with_user("Str0ng!pass");

        let result = use_case
            .execute(LoginRequest {
                username: "user@example.com".to_string(),
                password: "Wr0ng!pass".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let (use_case, _) = use_case_with_user("Str0ng!pass");

        let result = use_case
            .execute(LoginRequest {
                username: "other@example.com".to_string(),
                password: "Str0ng!pass".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}
