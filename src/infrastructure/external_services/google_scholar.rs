use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::ports::LegalSearchProvider;
use crate::domain::entities::CaseHit;

const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search.json";

/// Scholar results come from a general search engine, so they rank below
/// dedicated legal databases.
const SCHOLAR_CONFIDENCE: f32 = 0.75;

#[derive(Deserialize)]
struct SerpApiResponse {
    organic_results: Option<Vec<OrganicResult>>,
}

#[derive(Deserialize)]
struct OrganicResult {
    title: Option<String>,
    link: Option<String>,
    publication_info: Option<PublicationInfo>,
}

#[derive(Deserialize)]
struct PublicationInfo {
    summary: Option<String>,
}

/// Google Scholar case search through SerpAPI. Serves as the fallback
/// source when the primary legal database has nothing.
pub struct GoogleScholarSearch {
    client: Client,
    api_key: Option<String>,
}

impl GoogleScholarSearch {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, api_key }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("SERPAPI_API_KEY").ok())
    }

    /// A result without a link still gets a working Scholar search URL.
    fn fallback_link(query: &str) -> String {
        Url::parse_with_params("https://scholar.google.com/scholar", &[("q", query)])
            .map(String::from)
            .unwrap_or_else(|_| "https://scholar.google.com/".to_string())
    }

    fn result_to_hit(result: OrganicResult, query: &str) -> Option<CaseHit> {
        let name = result.title?;
        let url = result
            .link
            .unwrap_or_else(|| Self::fallback_link(query));
        let publication = result
            .publication_info
            .and_then(|info| info.summary)
            .unwrap_or_default();

        Some(CaseHit {
            name,
            court: publication,
            year: String::new(),
            url,
            confidence: SCHOLAR_CONFIDENCE,
        })
    }
}

#[async_trait]
impl LegalSearchProvider for GoogleScholarSearch {
    async fn search_cases(&self, query: &str, limit: usize) -> Vec<CaseHit> {
        let Some(key) = self.api_key.as_deref() else {
            return vec![CaseHit::error("SerpAPI key not configured.")];
        };
        if query.trim().is_empty() {
            return vec![CaseHit::error("Empty search query.")];
        }

        let response = self
            .client
            .get(SERPAPI_ENDPOINT)
            .query(&[
                ("engine", "google_scholar"),
                ("q", query),
                ("num", &limit.to_string()),
                ("api_key", key),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Google Scholar request failed: {}", e);
                return vec![CaseHit::error(format!(
                    "Google Scholar request failed: {}",
                    e.without_url()
                ))];
            }
        };

        if !response.status().is_success() {
            return vec![CaseHit::error(format!(
                "Google Scholar returned HTTP {}",
                response.status()
            ))];
        }

        let parsed: SerpApiResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                return vec![CaseHit::error(format!(
                    "Google Scholar returned unreadable data: {}",
                    e
                ))];
            }
        };

        let hits: Vec<CaseHit> = parsed
            .organic_results
            .into_iter()
            .flatten()
            .filter_map(|r| Self::result_to_hit(r, query))
            .take(limit)
            .collect();

        if hits.is_empty() {
            return vec![CaseHit::error("No matching cases found.")];
        }
        hits
    }

    fn source_name(&self) -> &'static str {
        "Google Scholar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_link_encodes_query() {
        let link = GoogleScholarSearch::fallback_link("land dispute easement");
        assert!(link.starts_with("https://scholar.google.com/scholar?q="));
        assert!(link.contains("land"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_result_without_link_uses_fallback() {
        let result = OrganicResult {
            title: Some("A v. B".to_string()),
            link: None,
            publication_info: None,
        };
        let hit = GoogleScholarSearch::result_to_hit(result, "a v b").unwrap();
        assert!(hit.url.starts_with("https://scholar.google.com/scholar?q="));
        assert_eq!(hit.confidence, SCHOLAR_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_missing_key_yields_error_placeholder() {
        let search = GoogleScholarSearch::new(None);
        let hits = search.search_cases("contract", 5).await;
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].is_usable());
    }
}
