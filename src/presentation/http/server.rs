use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::http::{
    handlers::{
        AuthHandler, ChatHandler, DocumentHandler, FactCheckHandler, LawyerHandler,
        PrecedentHandler,
    },
    routes::{
        auth_routes, chat_routes, document_routes, fact_check_routes, health_routes,
        lawyer_routes, precedent_routes,
    },
};

pub struct HttpServer {
    auth_handler: Arc<AuthHandler>,
    document_handler: Arc<DocumentHandler>,
    chat_handler: Arc<ChatHandler>,
    precedent_handler: Arc<PrecedentHandler>,
    fact_check_handler: Arc<FactCheckHandler>,
    lawyer_handler: Arc<LawyerHandler>,
    port: u16,
}

impl HttpServer {
    pub fn new(
        auth_handler: Arc<AuthHandler>,
        document_handler: Arc<DocumentHandler>,
        chat_handler: Arc<ChatHandler>,
        precedent_handler: Arc<PrecedentHandler>,
        fact_check_handler: Arc<FactCheckHandler>,
        lawyer_handler: Arc<LawyerHandler>,
        port: Option<u16>,
    ) -> Self {
        Self {
            auth_handler,
            document_handler,
            chat_handler,
            precedent_handler,
            fact_check_handler,
            lawyer_handler,
            port: port.unwrap_or(3000),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .merge(health_routes())
            .merge(auth_routes(self.auth_handler))
            .merge(document_routes(self.document_handler))
            .merge(chat_routes(self.chat_handler))
            .merge(precedent_routes(self.precedent_handler))
            .merge(fact_check_routes(self.fact_check_handler))
            .merge(lawyer_routes(self.lawyer_handler))
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(50 * 1024 * 1024)) // 50MB upload cap
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
