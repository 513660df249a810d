use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::application::ports::LegalSearchProvider;
use crate::domain::entities::CaseHit;

const SEARCH_ENDPOINT: &str = "https://www.courtlistener.com/api/rest/v4/search/";

const COURTLISTENER_CONFIDENCE: f32 = 0.95;

#[derive(Deserialize)]
struct CourtListenerResponse {
    results: Option<Vec<CourtListenerResult>>,
}

#[derive(Deserialize)]
struct CourtListenerResult {
    #[serde(rename = "caseName")]
    case_name: Option<String>,
    court: Option<String>,
    #[serde(rename = "dateFiled")]
    date_filed: Option<String>,
    absolute_url: Option<String>,
}

/// CourtListener opinion search (US case law). Optional source for
/// queries outside the primary database's jurisdiction.
pub struct CourtListenerSearch {
    client: Client,
    api_token: Option<String>,
}

impl CourtListenerSearch {
    pub fn new(api_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, api_token }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("COURTLISTENER_API_TOKEN").ok())
    }

    fn result_to_hit(result: CourtListenerResult) -> Option<CaseHit> {
        let name = result.case_name?;
        let url = result
            .absolute_url
            .map(|path| format!("https://www.courtlistener.com{}", path))
            .unwrap_or_default();
        let year = result
            .date_filed
            .as_deref()
            .and_then(|d| d.get(..4))
            .unwrap_or("")
            .to_string();

        Some(CaseHit {
            name,
            court: result.court.unwrap_or_default(),
            year,
            url,
            confidence: COURTLISTENER_CONFIDENCE,
        })
    }
}

#[async_trait]
impl LegalSearchProvider for CourtListenerSearch {
    async fn search_cases(&self, query: &str, limit: usize) -> Vec<CaseHit> {
        if query.trim().is_empty() {
            return vec![CaseHit::error("Empty search query.")];
        }

        let mut request = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[("q", query), ("type", "o")]);
        if let Some(token) = self.api_token.as_deref() {
            request = request.header("Authorization", format!("Token {}", token));
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("CourtListener request failed: {}", e);
                return vec![CaseHit::error(format!(
                    "CourtListener request failed: {}",
                    e.without_url()
                ))];
            }
        };

        if !response.status().is_success() {
            return vec![CaseHit::error(format!(
                "CourtListener returned HTTP {}",
                response.status()
            ))];
        }

        let parsed: CourtListenerResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                return vec![CaseHit::error(format!(
                    "CourtListener returned unreadable data: {}",
                    e
                ))];
            }
        };

        let hits: Vec<CaseHit> = parsed
            .results
            .into_iter()
            .flatten()
            .filter_map(Self::result_to_hit)
            .take(limit)
            .collect();

        if hits.is_empty() {
            return vec![CaseHit::error("No matching cases found.")];
        }
        hits
    }

    fn source_name(&self) -> &'static str {
        "CourtListener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_maps_to_hit() {
        let result = CourtListenerResult {
            case_name: Some("Marbury v. Madison".to_string()),
            court: Some("Supreme Court".to_string()),
            date_filed: Some("1803-02-24".to_string()),
            absolute_url: Some("/opinion/123/marbury-v-madison/".to_string()),
        };
        let hit = CourtListenerSearch::result_to_hit(result).unwrap();
        assert_eq!(
            hit.url,
            "https://www.courtlistener.com/opinion/123/marbury-v-madison/"
        );
        assert_eq!(hit.year, "1803");
        assert_eq!(hit.confidence, COURTLISTENER_CONFIDENCE);
    }

    #[test]
    fn test_result_without_name_is_dropped() {
        let result = CourtListenerResult {
            case_name: None,
            court: None,
            date_filed: None,
            absolute_url: None,
        };
        assert!(CourtListenerSearch::result_to_hit(result).is_none());
    }
}
