use async_trait::async_trait;

use crate::domain::entities::CaseHit;

/// Case-law search over one external legal database. Implementations
/// degrade to single-element error placeholder lists instead of
/// returning `Err` for expected failures (missing key, timeout, empty
/// query), matching the soft-failure policy of the search layer.
#[async_trait]
pub trait LegalSearchProvider: Send + Sync {
    async fn search_cases(&self, query: &str, limit: usize) -> Vec<CaseHit>;

    /// Human-readable source label used in chat source attribution.
    fn source_name(&self) -> &'static str;
}
