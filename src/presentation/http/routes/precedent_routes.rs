use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::presentation::http::handlers::PrecedentHandler;

pub fn precedent_routes(handler: Arc<PrecedentHandler>) -> Router {
    Router::new()
        .route("/find-precedents", post(PrecedentHandler::find_precedents))
        .route("/get-precedents", get(PrecedentHandler::get_precedents))
        .with_state(handler)
}
