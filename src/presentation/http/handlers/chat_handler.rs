use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::services::TokenService;
use crate::application::use_cases::chat::{ChatError, ChatRequest};
use crate::application::use_cases::ChatUseCase;
use crate::presentation::http::auth::{AuthenticatedUser, TokenVerifier};
use crate::presentation::http::dto::{ChatRequestDto, ChatResponseDto, ErrorResponseDto};

pub struct ChatHandler {
    chat_use_case: Arc<ChatUseCase>,
    token_service: Arc<TokenService>,
}

impl TokenVerifier for ChatHandler {
    fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}

impl ChatHandler {
    pub fn new(chat_use_case: Arc<ChatUseCase>, token_service: Arc<TokenService>) -> Self {
        Self {
            chat_use_case,
            token_service,
        }
    }

    pub async fn chat(
        State(handler): State<Arc<ChatHandler>>,
        AuthenticatedUser(user_id): AuthenticatedUser,
        Json(body): Json<ChatRequestDto>,
    ) -> impl IntoResponse {
        let request = ChatRequest {
            user_id,
            message: body.message,
        };

        match handler.chat_use_case.execute(request).await {
            Ok(response) => {
                (StatusCode::OK, Json(ChatResponseDto::from(response))).into_response()
            }
            Err(e) => {
                let status = match e {
                    ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
                    ChatError::UserNotFound(_) => StatusCode::NOT_FOUND,
                    ChatError::RepositoryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(ErrorResponseDto::new(e.to_string()))).into_response()
            }
        }
    }
}
