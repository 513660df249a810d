use axum::{routing::post, Router};
use std::sync::Arc;

use crate::presentation::http::handlers::AuthHandler;

pub fn auth_routes(handler: Arc<AuthHandler>) -> Router {
    Router::new()
        .route("/signup", post(AuthHandler::signup))
        .route("/login", post(AuthHandler::login))
        .with_state(handler)
}
