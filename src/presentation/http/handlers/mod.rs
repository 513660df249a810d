pub mod auth_handler;
pub mod chat_handler;
pub mod document_handler;
pub mod fact_check_handler;
pub mod lawyer_handler;
pub mod precedent_handler;

pub use auth_handler::AuthHandler;
pub use chat_handler::ChatHandler;
pub use document_handler::DocumentHandler;
pub use fact_check_handler::FactCheckHandler;
pub use lawyer_handler::LawyerHandler;
pub use precedent_handler::PrecedentHandler;
