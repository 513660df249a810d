use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::EmbeddingProvider;
use crate::domain::repositories::ChunkRepository;

#[derive(Debug)]
pub enum RetrievalError {
    EmbeddingError(String),
    RepositoryError(String),
}

impl std::fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrievalError::EmbeddingError(msg) => write!(f, "Embedding error: {}", msg),
            RetrievalError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RetrievalError {}

/// Outcome of a per-user retrieval pass. `NoIndex` signals that the user
/// has not uploaded a document yet so callers can fall back to the
/// stored summary.
#[derive(Debug, Clone, PartialEq)]
pub enum RetrievedContext {
    NoIndex,
    NoMatch,
    Context { chunks: Vec<String> },
}

impl RetrievedContext {
    pub fn joined(&self) -> Option<String> {
        match self {
            RetrievedContext::Context { chunks } => Some(chunks.join("\n\n")),
            _ => None,
        }
    }
}

/// Similarity search over the user's document chunks: embed the query,
/// rank stored chunks, return the top-k texts.
pub struct RetrievalService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    chunk_repository: Arc<dyn ChunkRepository>,
    top_k: i32,
}

impl RetrievalService {
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        chunk_repository: Arc<dyn ChunkRepository>,
    ) -> Self {
        Self {
            embedding_provider,
            chunk_repository,
            top_k: 5,
        }
    }

    pub async fn retrieve(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<RetrievedContext, RetrievalError> {
        let chunk_count = self
            .chunk_repository
            .count_for_user(user_id)
            .await
            .map_err(|e| RetrievalError::RepositoryError(e.to_string()))?;

        if chunk_count == 0 {
            return Ok(RetrievedContext::NoIndex);
        }

        let query_vector = self
            .embedding_provider
            .embed(query)
            .await
            .map_err(|e| RetrievalError::EmbeddingError(e.to_string()))?;

        let results = self
            .chunk_repository
            .similarity_search_for_user(user_id, &query_vector, self.top_k)
            .await
            .map_err(|e| RetrievalError::RepositoryError(e.to_string()))?;

        if results.is_empty() {
            return Ok(RetrievedContext::NoMatch);
        }

        let chunks = results
            .into_iter()
            .map(|r| r.chunk.chunk_text().to_string())
            .collect();

        Ok(RetrievedContext::Context { chunks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_context() {
        let ctx = RetrievedContext::Context {
            chunks: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(ctx.joined().unwrap(), "first\n\nsecond");
        assert!(RetrievedContext::NoIndex.joined().is_none());
    }
}
