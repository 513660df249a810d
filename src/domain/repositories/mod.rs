pub mod chat_repository;
pub mod chunk_repository;
pub mod fact_check_repository;
pub mod precedent_repository;
pub mod user_repository;

pub use chat_repository::ChatRepository;
pub use chunk_repository::{ChunkRepository, ChunkSearchResult};
pub use fact_check_repository::FactCheckRepository;
pub use precedent_repository::PrecedentRepository;
pub use user_repository::UserRepository;
