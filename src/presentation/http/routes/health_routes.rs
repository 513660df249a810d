use axum::{http::StatusCode, routing::get, Json, Router};

use crate::presentation::http::dto::HealthResponseDto;

async fn health() -> (StatusCode, Json<HealthResponseDto>) {
    (
        StatusCode::OK,
        Json(HealthResponseDto {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}
