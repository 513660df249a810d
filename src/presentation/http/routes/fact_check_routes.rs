use axum::{routing::get, Router};
use std::sync::Arc;

use crate::presentation::http::handlers::FactCheckHandler;

pub fn fact_check_routes(handler: Arc<FactCheckHandler>) -> Router {
    Router::new()
        .route("/fact-history", get(FactCheckHandler::fact_history))
        .with_state(handler)
}
