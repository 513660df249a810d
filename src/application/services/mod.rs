pub mod chat_agent;
pub mod credentials;
pub mod document_indexer;
pub mod fact_checker;
pub mod model_output;
pub mod precedent_finder;
pub mod retrieval_service;
pub mod summarizer;
pub mod token_service;

pub use chat_agent::ChatAgentService;
pub use document_indexer::DocumentIndexerService;
pub use fact_checker::FactCheckService;
pub use precedent_finder::PrecedentFinderService;
pub use retrieval_service::RetrievalService;
pub use summarizer::SummarizerService;
pub use token_service::TokenService;
