use chrono::{DateTime, Utc};
use diesel::prelude::*;
use pgvector::Vector;
use uuid::Uuid;

use crate::domain::entities::DocumentChunk;
use crate::infrastructure::database::schema::document_chunks;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = document_chunks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentChunkModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_name: String,
    pub chunk_text: String,
    pub chunk_index: i32,
    pub model_name: String,
    pub embedding: Option<Vector>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = document_chunks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDocumentChunkModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_name: String,
    pub chunk_text: String,
    pub chunk_index: i32,
    pub model_name: String,
    pub embedding: Option<Vector>,
    pub created_at: DateTime<Utc>,
}

impl From<&DocumentChunk> for NewDocumentChunkModel {
    fn from(chunk: &DocumentChunk) -> Self {
        Self {
            id: chunk.id(),
            user_id: chunk.user_id(),
            document_name: chunk.document_name().to_string(),
            chunk_text: chunk.chunk_text().to_string(),
            chunk_index: chunk.chunk_index(),
            model_name: chunk.model_name().to_string(),
            embedding: chunk.embedding().cloned(),
            created_at: chunk.created_at(),
        }
    }
}

impl From<DocumentChunkModel> for DocumentChunk {
    fn from(model: DocumentChunkModel) -> Self {
        DocumentChunk::from_parts(
            model.id,
            model.user_id,
            model.document_name,
            model.chunk_text,
            model.chunk_index,
            model.model_name,
            model.embedding,
            model.created_at,
        )
    }
}
