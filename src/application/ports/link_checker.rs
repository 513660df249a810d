use async_trait::async_trait;

/// Lightweight URL liveness check used when cleaning precedent results.
/// Any transport error or non-success status means "unverified", never a
/// hard failure.
#[async_trait]
pub trait LinkChecker: Send + Sync {
    async fn is_alive(&self, url: &str) -> bool;
}
