mod application;
mod domain;
mod infrastructure;
mod presentation;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use infrastructure::container::AppContainer;
use presentation::http::server::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let container = AppContainer::new().await?;

    let port = std::env::var("PORT").ok().and_then(|p| p.parse().ok());

    let server = HttpServer::new(
        container.auth_handler.clone(),
        container.document_handler.clone(),
        container.chat_handler.clone(),
        container.precedent_handler.clone(),
        container.fact_check_handler.clone(),
        container.lawyer_handler.clone(),
        port,
    );

    tracing::info!("Starting LexiLaw backend");
    server.run().await
}
