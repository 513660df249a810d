use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::EmbeddingProvider;
use crate::domain::entities::DocumentChunk;
use crate::domain::repositories::ChunkRepository;

#[derive(Debug)]
pub enum IndexingError {
    EmbeddingError(String),
    RepositoryError(String),
}

impl std::fmt::Display for IndexingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexingError::EmbeddingError(msg) => write!(f, "Embedding error: {}", msg),
            IndexingError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for IndexingError {}

/// Builds the per-user vector index: chunk the document text, embed each
/// chunk, and replace whatever index the user had before.
pub struct DocumentIndexerService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    chunk_repository: Arc<dyn ChunkRepository>,
    chunk_size_words: usize,
    chunk_overlap_words: usize,
}

const EMBEDDING_BATCH_SIZE: usize = 10;

impl DocumentIndexerService {
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        chunk_repository: Arc<dyn ChunkRepository>,
    ) -> Self {
        Self {
            embedding_provider,
            chunk_repository,
            chunk_size_words: 200,
            chunk_overlap_words: 20,
        }
    }

    /// Rebuilds the user's index from scratch. Returns the number of
    /// chunks stored.
    pub async fn rebuild_index(
        &self,
        user_id: Uuid,
        document_name: &str,
        text: &str,
    ) -> Result<usize, IndexingError> {
        let mut chunks = self.create_chunks(user_id, document_name, text);
        self.embed_chunks(&mut chunks).await?;

        self.chunk_repository
            .replace_for_user(user_id, &chunks)
            .await
            .map_err(|e| IndexingError::RepositoryError(e.to_string()))?;

        Ok(chunks.len())
    }

    fn create_chunks(
        &self,
        user_id: Uuid,
        document_name: &str,
        text: &str,
    ) -> Vec<DocumentChunk> {
        let model_name = self.embedding_provider.model_name();
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut chunks = Vec::new();

        if words.is_empty() {
            return chunks;
        }

        let mut start = 0;
        let mut chunk_index = 0;

        while start < words.len() {
            let end = std::cmp::min(start + self.chunk_size_words, words.len());
            let chunk_text = words[start..end].join(" ");

            // Skip trailing fragments too small to be worth indexing.
            if chunk_text.trim().len() < 10 {
                break;
            }

            chunks.push(DocumentChunk::new(
                user_id,
                document_name.to_string(),
                chunk_text,
                chunk_index,
                model_name.clone(),
            ));
            chunk_index += 1;

            if end >= words.len() {
                break;
            }
            start = std::cmp::max(
                start + self.chunk_size_words - self.chunk_overlap_words,
                start + 1,
            );
        }

        chunks
    }

    async fn embed_chunks(&self, chunks: &mut [DocumentChunk]) -> Result<(), IndexingError> {
        for batch in chunks.chunks_mut(EMBEDDING_BATCH_SIZE) {
            let texts: Vec<String> = batch
                .iter()
                .map(|chunk| chunk.chunk_text().to_string())
                .collect();

            let vectors = self
                .embedding_provider
                .embed_batch(&texts)
                .await
                .map_err(|e| IndexingError::EmbeddingError(e.to_string()))?;

            if vectors.len() != batch.len() {
                return Err(IndexingError::EmbeddingError(format!(
                    "Expected {} embeddings, got {}",
                    batch.len(),
                    vectors.len()
                )));
            }

            for (chunk, vector) in batch.iter_mut().zip(vectors) {
                chunk.set_embedding(vector);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pgvector::Vector;

    use crate::application::ports::embedding_provider::EmbeddingProviderError;

    struct StubEmbedder;

    #[async_trait]
    impl EmbeddingProvider for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vector, EmbeddingProviderError> {
            Ok(Vector::from(vec![0.0, 1.0]))
        }

        async fn embed_batch(
            &self,
            texts: &[String],
        ) -> Result<Vec<Vector>, EmbeddingProviderError> {
            Ok(texts.iter().map(|_| Vector::from(vec![0.0, 1.0])).collect())
        }

        fn model_name(&self) -> String {
            "stub".to_string()
        }
    }

    fn indexer_with_repo(repo: Arc<dyn ChunkRepository>) -> DocumentIndexerService {
        DocumentIndexerService::new(Arc::new(StubEmbedder), repo)
    }

    struct NoopChunkRepo;

    #[async_trait]
    impl ChunkRepository for NoopChunkRepo {
        async fn replace_for_user(
            &self,
            _user_id: Uuid,
            _chunks: &[DocumentChunk],
        ) -> Result<(), crate::domain::repositories::chunk_repository::ChunkRepositoryError>
        {
            Ok(())
        }

        async fn similarity_search_for_user(
            &self,
            _user_id: Uuid,
            _query_vector: &Vector,
            _limit: i32,
        ) -> Result<
            Vec<crate::domain::repositories::ChunkSearchResult>,
            crate::domain::repositories::chunk_repository::ChunkRepositoryError,
        > {
            Ok(Vec::new())
        }

        async fn count_for_user(
            &self,
            _user_id: Uuid,
        ) -> Result<i64, crate::domain::repositories::chunk_repository::ChunkRepositoryError>
        {
            Ok(0)
        }
    }

    #[test]
    fn test_chunking_overlap() {
        let indexer = indexer_with_repo(Arc::new(NoopChunkRepo));
        let words: Vec<String> = (0..450).map(|i| format!("word{}", i)).collect();
        let text = words.join(" ");

        let chunks = indexer.create_chunks(Uuid::new_v4(), "doc.pdf", &text);

        assert!(chunks.len() >= 2);
        assert_eq!(chunks[0].chunk_index(), 0);
        // Second chunk starts chunk_size - overlap words in.
        assert!(chunks[1].chunk_text().starts_with("word180"));
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let indexer = indexer_with_repo(Arc::new(NoopChunkRepo));
        let chunks = indexer.create_chunks(Uuid::new_v4(), "doc.pdf", "   ");
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_rebuild_embeds_every_chunk() {
        let indexer = indexer_with_repo(Arc::new(NoopChunkRepo));
        let words: Vec<String> = (0..300).map(|i| format!("w{}", i)).collect();
        let stored = indexer
            .rebuild_index(Uuid::new_v4(), "doc.pdf", &words.join(" "))
            .await
            .unwrap();
        assert!(stored >= 2);
    }
}
