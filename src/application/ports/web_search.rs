use async_trait::async_trait;

/// General web search. Returns a formatted context string for the LLM;
/// failures come back as readable error text rather than `Err`.
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> String;
}
