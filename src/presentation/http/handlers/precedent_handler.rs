use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::services::TokenService;
use crate::application::use_cases::find_precedents::{
    FindPrecedentsError, FindPrecedentsRequest,
};
use crate::application::use_cases::{FindPrecedentsUseCase, GetPrecedentsUseCase};
use crate::presentation::http::auth::{AuthenticatedUser, TokenVerifier};
use crate::presentation::http::dto::{
    ErrorResponseDto, FindPrecedentsRequestDto, FindPrecedentsResponseDto,
    StoredPrecedentsResponseDto,
};

pub struct PrecedentHandler {
    find_use_case: Arc<FindPrecedentsUseCase>,
    get_use_case: Arc<GetPrecedentsUseCase>,
    token_service: Arc<TokenService>,
}

impl TokenVerifier for PrecedentHandler {
    fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}

impl PrecedentHandler {
    pub fn new(
        find_use_case: Arc<FindPrecedentsUseCase>,
        get_use_case: Arc<GetPrecedentsUseCase>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            find_use_case,
            get_use_case,
            token_service,
        }
    }

    pub async fn find_precedents(
        State(handler): State<Arc<PrecedentHandler>>,
        AuthenticatedUser(user_id): AuthenticatedUser,
        body: Option<Json<FindPrecedentsRequestDto>>,
    ) -> impl IntoResponse {
        let query = body.and_then(|Json(dto)| dto.query);
        let request = FindPrecedentsRequest { user_id, query };

        match handler.find_use_case.execute(request).await {
            Ok(response) => (
                StatusCode::OK,
                Json(FindPrecedentsResponseDto::from(response)),
            )
                .into_response(),
            Err(e) => {
                let status = match e {
                    FindPrecedentsError::NoSummaryAvailable => StatusCode::BAD_REQUEST,
                    FindPrecedentsError::UserNotFound(_) => StatusCode::NOT_FOUND,
                    FindPrecedentsError::RepositoryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(ErrorResponseDto::new(e.to_string()))).into_response()
            }
        }
    }

    pub async fn get_precedents(
        State(handler): State<Arc<PrecedentHandler>>,
        AuthenticatedUser(user_id): AuthenticatedUser,
    ) -> impl IntoResponse {
        match handler.get_use_case.execute(user_id).await {
            Ok(response) => (
                StatusCode::OK,
                Json(StoredPrecedentsResponseDto::from(response)),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseDto::new(e.to_string())),
            )
                .into_response(),
        }
    }
}
