pub mod courtlistener;
pub mod embeddings_client;
pub mod geoapify_places;
pub mod gemini_client;
pub mod google_scholar;
pub mod head_link_checker;
pub mod indian_kanoon;
pub mod pdf_extractor;
pub mod tavily_search;

pub use courtlistener::CourtListenerSearch;
pub use embeddings_client::EmbeddingsClient;
pub use geoapify_places::GeoapifyPlaces;
pub use gemini_client::GeminiClient;
pub use google_scholar::GoogleScholarSearch;
pub use head_link_checker::HeadLinkChecker;
pub use indian_kanoon::IndianKanoonSearch;
pub use pdf_extractor::PdfExtractor;
pub use tavily_search::TavilyWebSearch;
