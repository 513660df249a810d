use chrono::{DateTime, Utc};
use pgvector::Vector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One embedded chunk of a user's currently indexed document. The whole
/// set for a user is replaced on every upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    id: Uuid,
    user_id: Uuid,
    document_name: String,
    chunk_text: String,
    chunk_index: i32,
    model_name: String,
    embedding: Option<Vector>,
    created_at: DateTime<Utc>,
}

impl DocumentChunk {
    pub fn new(
        user_id: Uuid,
        document_name: String,
        chunk_text: String,
        chunk_index: i32,
        model_name: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            document_name,
            chunk_text,
            chunk_index,
            model_name,
            embedding: None,
            created_at: Utc::now(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Uuid,
        user_id: Uuid,
        document_name: String,
        chunk_text: String,
        chunk_index: i32,
        model_name: String,
        embedding: Option<Vector>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            document_name,
            chunk_text,
            chunk_index,
            model_name,
            embedding,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn chunk_text(&self) -> &str {
        &self.chunk_text
    }

    pub fn chunk_index(&self) -> i32 {
        self.chunk_index
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn embedding(&self) -> Option<&Vector> {
        self.embedding.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_embedding(&mut self, embedding: Vector) {
        self.embedding = Some(embedding);
    }

    pub fn dimension(&self) -> Option<usize> {
        self.embedding.as_ref().map(|e| e.as_slice().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_starts_unembedded() {
        let chunk = DocumentChunk::new(
            Uuid::new_v4(),
            "lease.pdf".to_string(),
            "The tenant shall not keep pets.".to_string(),
            0,
            "default".to_string(),
        );
        assert!(chunk.embedding().is_none());
        assert_eq!(chunk.dimension(), None);
    }

    #[test]
    fn test_set_embedding() {
        let mut chunk = DocumentChunk::new(
            Uuid::new_v4(),
            "lease.pdf".to_string(),
            "text".to_string(),
            0,
            "default".to_string(),
        );
        chunk.set_embedding(Vector::from(vec![0.1, 0.2, 0.3]));
        assert_eq!(chunk.dimension(), Some(3));
    }
}
