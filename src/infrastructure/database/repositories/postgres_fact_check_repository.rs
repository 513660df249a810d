use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::FactCheckRecord;
use crate::domain::repositories::{
    fact_check_repository::FactCheckRepositoryError, FactCheckRepository,
};
use crate::infrastructure::database::models::{FactCheckModel, NewFactCheckModel};
use crate::infrastructure::database::schema::fact_checks::dsl::*;
use crate::infrastructure::database::{get_connection_from_pool, DbPool};

pub struct PostgresFactCheckRepository {
    pool: DbPool,
}

impl PostgresFactCheckRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FactCheckRepository for PostgresFactCheckRepository {
    async fn append_batch(
        &self,
        records: &[FactCheckRecord],
    ) -> Result<(), FactCheckRepositoryError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| FactCheckRepositoryError::DatabaseError(e.to_string()))?;

        let rows: Vec<NewFactCheckModel> = records.iter().map(NewFactCheckModel::from).collect();

        diesel::insert_into(fact_checks)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| FactCheckRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn history_for_user(
        &self,
        for_user: Uuid,
    ) -> Result<Vec<FactCheckRecord>, FactCheckRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| FactCheckRepositoryError::DatabaseError(e.to_string()))?;

        let models = fact_checks
            .filter(user_id.eq(for_user))
            .order(created_at.desc())
            .load::<FactCheckModel>(&mut conn)
            .map_err(|e| FactCheckRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(FactCheckRecord::from).collect())
    }
}
