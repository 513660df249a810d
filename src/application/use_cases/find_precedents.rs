use std::sync::Arc;

use uuid::Uuid;

use crate::application::services::precedent_finder::{CleanedCaseHit, PrecedentFinderService};
use crate::domain::entities::{CaseHit, Precedent};
use crate::domain::repositories::{PrecedentRepository, UserRepository};

#[derive(Debug)]
pub enum FindPrecedentsError {
    UserNotFound(Uuid),
    NoSummaryAvailable,
    RepositoryError(String),
}

impl std::fmt::Display for FindPrecedentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindPrecedentsError::UserNotFound(id) => write!(f, "User not found: {}", id),
            FindPrecedentsError::NoSummaryAvailable => {
                write!(f, "No document summary found. Please upload a document first.")
            }
            FindPrecedentsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for FindPrecedentsError {}

#[derive(Debug, Clone)]
pub struct FindPrecedentsRequest {
    pub user_id: Uuid,
    /// When present, searched instead of the stored document summary.
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FindPrecedentsResponse {
    pub hits: Vec<CleanedCaseHit>,
    pub markdown: String,
    pub from_fallback: bool,
}

/// Finds precedents for the user's current document (or an ad-hoc query)
/// and appends the results to the precedent log.
pub struct FindPrecedentsUseCase {
    user_repository: Arc<dyn UserRepository>,
    precedent_repository: Arc<dyn PrecedentRepository>,
    finder: Arc<PrecedentFinderService>,
}

impl FindPrecedentsUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        precedent_repository: Arc<dyn PrecedentRepository>,
        finder: Arc<PrecedentFinderService>,
    ) -> Self {
        Self {
            user_repository,
            precedent_repository,
            finder,
        }
    }

    pub async fn execute(
        &self,
        request: FindPrecedentsRequest,
    ) -> Result<FindPrecedentsResponse, FindPrecedentsError> {
        let user = self
            .user_repository
            .find_by_id(request.user_id)
            .await
            .map_err(|e| FindPrecedentsError::RepositoryError(e.to_string()))?
            .ok_or(FindPrecedentsError::UserNotFound(request.user_id))?;

        let search_text = match request.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => query.to_string(),
            _ => user
                .current_summary()
                .map(str::to_string)
                .ok_or(FindPrecedentsError::NoSummaryAvailable)?,
        };

        let findings = self.finder.find(&search_text).await;

        if !findings.hits.is_empty() {
            let document_name = user.current_pdf_name().map(str::to_string);
            let rows: Vec<Precedent> = findings
                .hits
                .iter()
                .map(|hit| {
                    let case_hit = CaseHit {
                        name: hit.name.clone(),
                        court: hit.court.clone(),
                        year: hit.year.clone(),
                        url: hit.url.clone(),
                        confidence: hit.confidence,
                    };
                    Precedent::from_hit(
                        request.user_id,
                        document_name.clone(),
                        &case_hit,
                        Some(findings.markdown.clone()),
                    )
                })
                .collect();

            self.precedent_repository
                .append_batch(&rows)
                .await
                .map_err(|e| FindPrecedentsError::RepositoryError(e.to_string()))?;
        }

        Ok(FindPrecedentsResponse {
            hits: findings.hits,
            markdown: findings.markdown,
            from_fallback: findings.from_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::ports::llm_client::{CompletionRequest, LlmError};
    use crate::application::ports::{LegalSearchProvider, LinkChecker, LlmClient};
    use crate::domain::entities::User;
    use crate::domain::repositories::precedent_repository::PrecedentRepositoryError;
    use crate::domain::repositories::user_repository::UserRepositoryError;

    struct OneUser(User);

    #[async_trait]
    impl UserRepository for OneUser {
        async fn save(&self, _user: &User) -> Result<(), UserRepositoryError> {
            Ok(())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            if id == self.0.id() {
                Ok(Some(self.0.clone()))
            } else {
                Ok(None)
            }
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            Ok(None)
        }

        async fn update_current_document(
            &self,
            _id: Uuid,
            _summary: &str,
            _pdf_name: &str,
        ) -> Result<(), UserRepositoryError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingPrecedents {
        rows: Mutex<Vec<Precedent>>,
    }

    #[async_trait]
    impl PrecedentRepository for RecordingPrecedents {
        async fn append_batch(
            &self,
            precedents: &[Precedent],
        ) -> Result<(), PrecedentRepositoryError> {
            self.rows.lock().unwrap().extend_from_slice(precedents);
            Ok(())
        }

        async fn recent_for_user(
            &self,
            _user_id: Uuid,
            _limit: i64,
        ) -> Result<Vec<Precedent>, PrecedentRepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    struct ConceptsLlm;

    #[async_trait]
    impl LlmClient for ConceptsLlm {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
            Ok("[\"breach of contract\"]".to_string())
        }
    }

    struct FixedSearch(Vec<CaseHit>);

    #[async_trait]
    impl LegalSearchProvider for FixedSearch {
        async fn search_cases(&self, _query: &str, _limit: usize) -> Vec<CaseHit> {
            self.0.clone()
        }

        fn source_name(&self) -> &'static str {
            "Indian Kanoon"
        }
    }

    struct AllAlive;

    #[async_trait]
    impl LinkChecker for AllAlive {
        async fn is_alive(&self, _url: &str) -> bool {
            true
        }
    }

    fn make_use_case(
        user: User,
        hits: Vec<CaseHit>,
    ) -> (FindPrecedentsUseCase, Arc<RecordingPrecedents>) {
        let precedents = Arc::new(RecordingPrecedents::default());
        let finder = PrecedentFinderService::new(
            Arc::new(ConceptsLlm),
            Arc::new(FixedSearch(hits)),
            Arc::new(FixedSearch(Vec::new())),
            Arc::new(AllAlive),
        )
        .with_link_verification(false);
        let use_case = FindPrecedentsUseCase::new(
            Arc::new(OneUser(user)),
            precedents.clone(),
            Arc::new(finder),
        );
        (use_case, precedents)
    }

    fn kanoon_hit() -> CaseHit {
        CaseHit {
            name: "A v. B".to_string(),
            court: "High Court".to_string(),
            year: "2005".to_string(),
            url: "https://indiankanoon.org/doc/99/".to_string(),
            confidence: 1.0,
        }
    }

    #[tokio::test]
    async fn test_results_are_persisted() {
        let mut user = User::new("u@example.com".to_string(), "hash".to_string());
        user.set_current_document("a contract dispute".to_string(), "case.pdf".to_string());
        let user_id = user.id();
        let (use_case, precedents) = make_use_case(user, vec![kanoon_hit()]);

        let response = use_case
            .execute(FindPrecedentsRequest {
                user_id,
                query: None,
            })
            .await
            .unwrap();

        assert_eq!(response.hits.len(), 1);
        let rows = precedents.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].case_name(), "A v. B");
        assert_eq!(rows[0].document_name(), Some("case.pdf"));
    }

    #[tokio::test]
    async fn test_requires_summary_when_no_query() {
        let user = User::new("u@example.com".to_string(), "hash".to_string());
        let user_id = user.id();
        let (use_case, _) = make_use_case(user, vec![kanoon_hit()]);

        let result = use_case
            .execute(FindPrecedentsRequest {
                user_id,
                query: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(FindPrecedentsError::NoSummaryAvailable)
        ));
    }

    #[tokio::test]
    async fn test_query_override_skips_summary_requirement() {
        let user = User::new("u@example.com".to_string(), "hash".to_string());
        let user_id = user.id();
        let (use_case, _) = make_use_case(user, vec![kanoon_hit()]);

        let response = use_case
            .execute(FindPrecedentsRequest {
                user_id,
                query: Some("property dispute easement".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.hits.len(), 1);
    }
}
