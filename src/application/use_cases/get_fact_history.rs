use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::FactCheckRecord;
use crate::domain::repositories::FactCheckRepository;

#[derive(Debug)]
pub enum GetFactHistoryError {
    RepositoryError(String),
}

impl std::fmt::Display for GetFactHistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetFactHistoryError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetFactHistoryError {}

pub struct GetFactHistoryUseCase {
    fact_check_repository: Arc<dyn FactCheckRepository>,
}

impl GetFactHistoryUseCase {
    pub fn new(fact_check_repository: Arc<dyn FactCheckRepository>) -> Self {
        Self {
            fact_check_repository,
        }
    }

    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FactCheckRecord>, GetFactHistoryError> {
        self.fact_check_repository
            .history_for_user(user_id)
            .await
            .map_err(|e| GetFactHistoryError::RepositoryError(e.to_string()))
    }
}
