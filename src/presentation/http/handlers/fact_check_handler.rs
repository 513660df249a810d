use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::services::TokenService;
use crate::application::use_cases::GetFactHistoryUseCase;
use crate::presentation::http::auth::{AuthenticatedUser, TokenVerifier};
use crate::presentation::http::dto::{
    ErrorResponseDto, FactCheckRecordDto, FactHistoryResponseDto,
};

pub struct FactCheckHandler {
    history_use_case: Arc<GetFactHistoryUseCase>,
    token_service: Arc<TokenService>,
}

impl TokenVerifier for FactCheckHandler {
    fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}

impl FactCheckHandler {
    pub fn new(
        history_use_case: Arc<GetFactHistoryUseCase>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            history_use_case,
            token_service,
        }
    }

    pub async fn fact_history(
        State(handler): State<Arc<FactCheckHandler>>,
        AuthenticatedUser(user_id): AuthenticatedUser,
    ) -> impl IntoResponse {
        match handler.history_use_case.execute(user_id).await {
            Ok(records) => {
                let history = records.iter().map(FactCheckRecordDto::from).collect();
                (StatusCode::OK, Json(FactHistoryResponseDto { history })).into_response()
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseDto::new(e.to_string())),
            )
                .into_response(),
        }
    }
}
