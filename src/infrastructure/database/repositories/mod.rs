pub mod postgres_chat_repository;
pub mod postgres_chunk_repository;
pub mod postgres_fact_check_repository;
pub mod postgres_precedent_repository;
pub mod postgres_user_repository;

pub use postgres_chat_repository::PostgresChatRepository;
pub use postgres_chunk_repository::PostgresChunkRepository;
pub use postgres_fact_check_repository::PostgresFactCheckRepository;
pub use postgres_precedent_repository::PostgresPrecedentRepository;
pub use postgres_user_repository::PostgresUserRepository;
