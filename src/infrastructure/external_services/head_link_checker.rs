use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::LinkChecker;

/// Liveness check via a HEAD request with a short timeout. Anything but
/// a 2xx or 3xx response counts as dead.
pub struct HeadLinkChecker {
    client: Client,
}

impl HeadLinkChecker {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for HeadLinkChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkChecker for HeadLinkChecker {
    async fn is_alive(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                status.is_success() || status.is_redirection()
            }
            Err(_) => false,
        }
    }
}
