use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repositories::PrecedentRepository;

const PRECEDENT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug)]
pub enum GetPrecedentsError {
    RepositoryError(String),
}

impl std::fmt::Display for GetPrecedentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetPrecedentsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetPrecedentsError {}

#[derive(Debug, Clone)]
pub struct GetPrecedentsResponse {
    /// Markdown from the most recent search, ready to render.
    pub formatted_markdown: String,
    /// Raw per-case records, newest first.
    pub precedents: Vec<serde_json::Value>,
}

pub struct GetPrecedentsUseCase {
    precedent_repository: Arc<dyn PrecedentRepository>,
}

impl GetPrecedentsUseCase {
    pub fn new(precedent_repository: Arc<dyn PrecedentRepository>) -> Self {
        Self {
            precedent_repository,
        }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<GetPrecedentsResponse, GetPrecedentsError> {
        let rows = self
            .precedent_repository
            .recent_for_user(user_id, PRECEDENT_HISTORY_LIMIT)
            .await
            .map_err(|e| GetPrecedentsError::RepositoryError(e.to_string()))?;

        let formatted_markdown = rows
            .first()
            .and_then(|row| row.ai_summary())
            .unwrap_or("No precedents found.")
            .to_string();

        let precedents = rows
            .iter()
            .filter_map(|row| row.raw_json().cloned())
            .collect();

        Ok(GetPrecedentsResponse {
            formatted_markdown,
            precedents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::entities::{CaseHit, Precedent};
    use crate::domain::repositories::precedent_repository::PrecedentRepositoryError;

    struct FixedPrecedents(Vec<Precedent>);

    #[async_trait]
    impl PrecedentRepository for FixedPrecedents {
        async fn append_batch(
            &self,
            _precedents: &[Precedent],
        ) -> Result<(), PrecedentRepositoryError> {
            Ok(())
        }

        async fn recent_for_user(
            &self,
            _user_id: Uuid,
            _limit: i64,
        ) -> Result<Vec<Precedent>, PrecedentRepositoryError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_markdown_comes_from_latest_row() {
        let hit = CaseHit {
            name: "A v. B".to_string(),
            court: "High Court".to_string(),
            year: "2005".to_string(),
            url: "https://indiankanoon.org/doc/99/".to_string(),
            confidence: 1.0,
        };
        let row = Precedent::from_hit(
            Uuid::new_v4(),
            Some("case.pdf".to_string()),
            &hit,
            Some("### Similar Precedents Found".to_string()),
        );
        let use_case = GetPrecedentsUseCase::new(Arc::new(FixedPrecedents(vec![row])));

        let response = use_case.execute(Uuid::new_v4()).await.unwrap();

        assert_eq!(response.formatted_markdown, "### Similar Precedents Found");
        assert_eq!(response.precedents.len(), 1);
        assert_eq!(response.precedents[0]["name"], "A v. B");
    }

    #[tokio::test]
    async fn test_empty_history_gives_placeholder() {
        let use_case = GetPrecedentsUseCase::new(Arc::new(FixedPrecedents(Vec::new())));
        let response = use_case.execute(Uuid::new_v4()).await.unwrap();
        assert_eq!(response.formatted_markdown, "No precedents found.");
        assert!(response.precedents.is_empty());
    }
}
