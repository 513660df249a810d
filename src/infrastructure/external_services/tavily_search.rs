use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::application::ports::WebSearchProvider;

const SEARCH_ENDPOINT: &str = "https://api.tavily.com/search";

const MAX_RESULTS: usize = 3;

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
    include_answer: bool,
}

#[derive(Deserialize)]
struct TavilyResponse {
    answer: Option<String>,
    results: Option<Vec<TavilyResult>>,
}

#[derive(Deserialize)]
struct TavilyResult {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

/// Web search through Tavily, formatted as context text for the model.
/// Failures come back as readable strings so a chat turn never dies on a
/// search outage.
pub struct TavilyWebSearch {
    client: Client,
    api_key: Option<String>,
}

impl TavilyWebSearch {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, api_key }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("TAVILY_API_KEY").ok())
    }

    fn format_response(response: TavilyResponse) -> String {
        let mut parts = Vec::new();

        if let Some(answer) = response.answer.filter(|a| !a.trim().is_empty()) {
            parts.push(format!("Answer: {}", answer));
        }

        for result in response.results.into_iter().flatten().take(MAX_RESULTS) {
            let title = result.title.unwrap_or_else(|| "Untitled".to_string());
            let url = result.url.unwrap_or_default();
            let content = result.content.unwrap_or_default();
            parts.push(format!("- {} ({})\n  {}", title, url, content));
        }

        if parts.is_empty() {
            "Web search returned no results.".to_string()
        } else {
            parts.join("\n")
        }
    }
}

#[async_trait]
impl WebSearchProvider for TavilyWebSearch {
    async fn search(&self, query: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return "Web search is not configured.".to_string();
        };

        let body = TavilyRequest {
            api_key: key,
            query,
            search_depth: "basic",
            max_results: MAX_RESULTS,
            include_answer: true,
        };

        let response = match self.client.post(SEARCH_ENDPOINT).json(&body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Tavily request failed: {}", e);
                return format!("Web search failed: {}", e.without_url());
            }
        };

        if !response.status().is_success() {
            return format!("Web search failed with HTTP {}", response.status());
        }

        match response.json::<TavilyResponse>().await {
            Ok(parsed) => Self::format_response(parsed),
            Err(e) => format!("Web search returned unreadable data: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_answer_and_sources() {
        let response = TavilyResponse {
            answer: Some("The limitation period is three years.".to_string()),
            results: Some(vec![TavilyResult {
                title: Some("Limitation Act".to_string()),
                url: Some("https://example.org/limitation".to_string()),
                content: Some("Section 3 bars suits after the period.".to_string()),
            }]),
        };
        let text = TavilyWebSearch::format_response(response);
        assert!(text.starts_with("Answer: The limitation period"));
        assert!(text.contains("Limitation Act"));
        assert!(text.contains("https://example.org/limitation"));
    }

    #[test]
    fn test_format_empty_response() {
        let response = TavilyResponse {
            answer: None,
            results: None,
        };
        assert_eq!(
            TavilyWebSearch::format_response(response),
            "Web search returned no results."
        );
    }

    #[tokio::test]
    async fn test_missing_key_degrades_to_message() {
        let search = TavilyWebSearch::new(None);
        let text = search.search("anything").await;
        assert_eq!(text, "Web search is not configured.");
    }
}
