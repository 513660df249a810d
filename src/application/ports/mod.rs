pub mod document_extractor;
pub mod embedding_provider;
pub mod legal_search;
pub mod link_checker;
pub mod llm_client;
pub mod places_search;
pub mod web_search;

pub use document_extractor::DocumentExtractor;
pub use embedding_provider::EmbeddingProvider;
pub use legal_search::LegalSearchProvider;
pub use link_checker::LinkChecker;
pub use llm_client::LlmClient;
pub use places_search::PlacesProvider;
pub use web_search::WebSearchProvider;
