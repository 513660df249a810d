use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::application::ports::LegalSearchProvider;
use crate::domain::entities::CaseHit;

const SEARCH_ENDPOINT: &str = "https://api.indiankanoon.org/search/";

/// Kanoon searches work best with a short query; longer inputs are cut
/// to the leading words.
const MAX_QUERY_WORDS: usize = 30;

#[derive(Deserialize)]
struct KanoonResponse {
    docs: Option<Vec<KanoonDoc>>,
}

#[derive(Deserialize)]
struct KanoonDoc {
    tid: Option<i64>,
    title: Option<String>,
    docsource: Option<String>,
    publishdate: Option<String>,
}

/// Indian Kanoon case-law search. The API is token-authenticated and
/// POST-based; hits from it carry full confidence.
pub struct IndianKanoonSearch {
    client: Client,
    api_token: Option<String>,
}

impl IndianKanoonSearch {
    pub fn new(api_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, api_token }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("INDIAN_KANOON_API_TOKEN").ok())
    }

    fn truncate_query(query: &str) -> String {
        query
            .split_whitespace()
            .take(MAX_QUERY_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn doc_to_hit(doc: KanoonDoc) -> Option<CaseHit> {
        let tid = doc.tid?;
        let name = doc.title.unwrap_or_default();
        let year = doc
            .publishdate
            .as_deref()
            .and_then(|d| d.get(..4))
            .unwrap_or("")
            .to_string();

        Some(CaseHit {
            name,
            court: doc.docsource.unwrap_or_default(),
            year,
            url: format!("https://indiankanoon.org/doc/{}/", tid),
            confidence: 1.0,
        })
    }
}

#[async_trait]
impl LegalSearchProvider for IndianKanoonSearch {
    async fn search_cases(&self, query: &str, limit: usize) -> Vec<CaseHit> {
        let Some(token) = self.api_token.as_deref() else {
            return vec![CaseHit::error("Indian Kanoon API token not configured.")];
        };
        if query.trim().is_empty() {
            return vec![CaseHit::error("Empty search query.")];
        }

        let form_input = Self::truncate_query(query);

        let response = self
            .client
            .post(SEARCH_ENDPOINT)
            .header("Authorization", format!("Token {}", token))
            .form(&[
                ("formInput", form_input.as_str()),
                ("pagenum", "0"),
                ("maxpages", "1"),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Indian Kanoon request failed: {}", e);
                return vec![CaseHit::error(format!(
                    "Indian Kanoon request failed: {}",
                    e.without_url()
                ))];
            }
        };

        if !response.status().is_success() {
            return vec![CaseHit::error(format!(
                "Indian Kanoon returned HTTP {}",
                response.status()
            ))];
        }

        let parsed: KanoonResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                return vec![CaseHit::error(format!(
                    "Indian Kanoon returned unreadable data: {}",
                    e
                ))];
            }
        };

        let hits: Vec<CaseHit> = parsed
            .docs
            .into_iter()
            .flatten()
            .filter_map(Self::doc_to_hit)
            .take(limit)
            .collect();

        if hits.is_empty() {
            return vec![CaseHit::error("No matching cases found.")];
        }
        hits
    }

    fn source_name(&self) -> &'static str {
        "Indian Kanoon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_truncated_to_word_limit() {
        let long: Vec<String> = (0..50).map(|i| format!("w{}", i)).collect();
        let truncated = IndianKanoonSearch::truncate_query(&long.join(" "));
        assert_eq!(truncated.split_whitespace().count(), MAX_QUERY_WORDS);
    }

    #[tokio::test]
    async fn test_missing_token_yields_error_placeholder() {
        let search = IndianKanoonSearch::new(None);
        let hits = search.search_cases("contract breach", 5).await;
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].is_usable());
        assert!(hits[0].name.contains("token"));
    }

    #[test]
    fn test_doc_without_tid_is_dropped() {
        let doc = KanoonDoc {
            tid: None,
            title: Some("Some Case".to_string()),
            docsource: None,
            publishdate: None,
        };
        assert!(IndianKanoonSearch::doc_to_hit(doc).is_none());
    }

    #[test]
    fn test_doc_maps_to_hit() {
        let doc = KanoonDoc {
            tid: Some(257876),
            title: Some("Kesavananda Bharati v. State of Kerala".to_string()),
            docsource: Some("Supreme Court of India".to_string()),
            publishdate: Some("1973-04-24".to_string()),
        };
        let hit = IndianKanoonSearch::doc_to_hit(doc).unwrap();
        assert_eq!(hit.url, "https://indiankanoon.org/doc/257876/");
        assert_eq!(hit.year, "1973");
        assert_eq!(hit.confidence, 1.0);
    }
}
