use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Precedent;
use crate::domain::repositories::{
    precedent_repository::PrecedentRepositoryError, PrecedentRepository,
};
use crate::infrastructure::database::models::{NewPrecedentModel, PrecedentModel};
use crate::infrastructure::database::schema::precedents::dsl::*;
use crate::infrastructure::database::{get_connection_from_pool, DbPool};

pub struct PostgresPrecedentRepository {
    pool: DbPool,
}

impl PostgresPrecedentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrecedentRepository for PostgresPrecedentRepository {
    async fn append_batch(
        &self,
        new_precedents: &[Precedent],
    ) -> Result<(), PrecedentRepositoryError> {
        if new_precedents.is_empty() {
            return Ok(());
        }

        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| PrecedentRepositoryError::DatabaseError(e.to_string()))?;

        let rows: Vec<NewPrecedentModel> =
            new_precedents.iter().map(NewPrecedentModel::from).collect();

        diesel::insert_into(precedents)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| PrecedentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn recent_for_user(
        &self,
        for_user: Uuid,
        limit: i64,
    ) -> Result<Vec<Precedent>, PrecedentRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| PrecedentRepositoryError::DatabaseError(e.to_string()))?;

        let models = precedents
            .filter(user_id.eq(for_user))
            .order(created_at.desc())
            .limit(limit)
            .load::<PrecedentModel>(&mut conn)
            .map_err(|e| PrecedentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Precedent::from).collect())
    }
}
