use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, StatusCode};
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::TokenService;
use crate::presentation::http::dto::ErrorResponseDto;

/// Implemented by handler states whose routes sit behind bearer auth.
pub trait TokenVerifier {
    fn token_service(&self) -> &TokenService;
}

/// Extractor that resolves the bearer token to a user id. Routes taking
/// this reject unauthenticated requests with 401.
pub struct AuthenticatedUser(pub Uuid);

fn unauthorized(detail: &str) -> (StatusCode, Json<ErrorResponseDto>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponseDto::new(detail)),
    )
}

impl<S> FromRequestParts<Arc<S>> for AuthenticatedUser
where
    S: TokenVerifier + Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponseDto>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<S>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Expected a bearer token"))?;

        let user_id = state
            .token_service()
            .verify(token)
            .map_err(|e| unauthorized(&e.to_string()))?;

        Ok(AuthenticatedUser(user_id))
    }
}
