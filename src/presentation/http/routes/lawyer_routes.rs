use axum::{routing::post, Router};
use std::sync::Arc;

use crate::presentation::http::handlers::LawyerHandler;

pub fn lawyer_routes(handler: Arc<LawyerHandler>) -> Router {
    Router::new()
        .route("/find-lawyers", post(LawyerHandler::find_lawyers))
        .with_state(handler)
}
