pub mod auth_routes;
pub mod chat_routes;
pub mod document_routes;
pub mod fact_check_routes;
pub mod health_routes;
pub mod lawyer_routes;
pub mod precedent_routes;

pub use auth_routes::auth_routes;
pub use chat_routes::chat_routes;
pub use document_routes::document_routes;
pub use fact_check_routes::fact_check_routes;
pub use health_routes::health_routes;
pub use lawyer_routes::lawyer_routes;
pub use precedent_routes::precedent_routes;
