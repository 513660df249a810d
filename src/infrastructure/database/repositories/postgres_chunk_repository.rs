use async_trait::async_trait;
use diesel::prelude::*;
use pgvector::Vector;
use uuid::Uuid;

use crate::domain::entities::DocumentChunk;
use crate::domain::repositories::{
    chunk_repository::ChunkRepositoryError, ChunkRepository, ChunkSearchResult,
};
use crate::infrastructure::database::models::{DocumentChunkModel, NewDocumentChunkModel};
use crate::infrastructure::database::schema::document_chunks::dsl::*;
use crate::infrastructure::database::{get_connection_from_pool, DbPool};

pub struct PostgresChunkRepository {
    pool: DbPool,
}

impl PostgresChunkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChunkRepository for PostgresChunkRepository {
    async fn replace_for_user(
        &self,
        for_user: Uuid,
        chunks: &[DocumentChunk],
    ) -> Result<(), ChunkRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ChunkRepositoryError::DatabaseError(e.to_string()))?;

        let rows: Vec<NewDocumentChunkModel> =
            chunks.iter().map(NewDocumentChunkModel::from).collect();

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(document_chunks.filter(user_id.eq(for_user))).execute(conn)?;
            if !rows.is_empty() {
                diesel::insert_into(document_chunks)
                    .values(&rows)
                    .execute(conn)?;
            }
            Ok(())
        })
        .map_err(|e| ChunkRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn similarity_search_for_user(
        &self,
        for_user: Uuid,
        query_vector: &Vector,
        limit: i32,
    ) -> Result<Vec<ChunkSearchResult>, ChunkRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ChunkRepositoryError::DatabaseError(e.to_string()))?;

        let models = document_chunks
            .filter(user_id.eq(for_user))
            .filter(embedding.is_not_null())
            .load::<DocumentChunkModel>(&mut conn)
            .map_err(|e| ChunkRepositoryError::DatabaseError(e.to_string()))?;

        let mut results: Vec<ChunkSearchResult> = models
            .into_iter()
            .filter_map(|model| {
                let score = model
                    .embedding
                    .as_ref()
                    .map(|vec| cosine_similarity(query_vector, vec))?;
                Some(ChunkSearchResult {
                    chunk: DocumentChunk::from(model),
                    similarity_score: score,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(limit.max(0) as usize);

        Ok(results)
    }

    async fn count_for_user(&self, for_user: Uuid) -> Result<i64, ChunkRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ChunkRepositoryError::DatabaseError(e.to_string()))?;

        document_chunks
            .filter(user_id.eq(for_user))
            .count()
            .get_result(&mut conn)
            .map_err(|e| ChunkRepositoryError::DatabaseError(e.to_string()))
    }
}

fn cosine_similarity(a: &Vector, b: &Vector) -> f32 {
    let a_slice = a.as_slice();
    let b_slice = b.as_slice();

    if a_slice.len() != b_slice.len() {
        return 0.0;
    }

    let dot_product: f32 = a_slice.iter().zip(b_slice.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a_slice.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b_slice.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
