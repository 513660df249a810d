use std::sync::Arc;

use crate::application::ports::llm_client::CompletionRequest;
use crate::application::ports::{LegalSearchProvider, LinkChecker, LlmClient};
use crate::application::services::model_output::extract_json_array;
use crate::domain::entities::CaseHit;

/// A case hit after cleaning: URL-deduplicated, confidence rounded to
/// two decimals, optionally liveness-checked.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CleanedCaseHit {
    pub name: String,
    pub court: String,
    pub year: String,
    pub url: String,
    pub confidence: f32,
    pub verified: bool,
}

#[derive(Debug, Clone)]
pub struct PrecedentFindings {
    pub hits: Vec<CleanedCaseHit>,
    pub markdown: String,
    /// True when the agent pipeline failed and the direct scholar search
    /// produced the results instead.
    pub from_fallback: bool,
}

/// Derives legal concepts from a document summary and searches external
/// case-law sources, falling back from the primary source to the
/// secondary one and, on total failure, to a direct secondary query.
pub struct PrecedentFinderService {
    llm_client: Arc<dyn LlmClient>,
    primary_search: Arc<dyn LegalSearchProvider>,
    fallback_search: Arc<dyn LegalSearchProvider>,
    link_checker: Arc<dyn LinkChecker>,
    verify_links: bool,
}

impl PrecedentFinderService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        primary_search: Arc<dyn LegalSearchProvider>,
        fallback_search: Arc<dyn LegalSearchProvider>,
        link_checker: Arc<dyn LinkChecker>,
    ) -> Self {
        Self {
            llm_client,
            primary_search,
            fallback_search,
            link_checker,
            verify_links: true,
        }
    }

    pub fn with_link_verification(mut self, enabled: bool) -> Self {
        self.verify_links = enabled;
        self
    }

    pub async fn find(&self, summary: &str) -> PrecedentFindings {
        if summary.trim().is_empty() {
            return PrecedentFindings {
                hits: Vec::new(),
                markdown: "Could not find precedents: No summary text provided.".to_string(),
                from_fallback: false,
            };
        }

        match self.derive_concepts(summary).await {
            Some(concepts) => {
                let query = concepts.join("; ");
                let mut hits = self.primary_search.search_cases(&query, 5).await;

                if !hits.iter().any(CaseHit::is_usable) {
                    tracing::info!(
                        "{} returned no usable results, trying {}",
                        self.primary_search.source_name(),
                        self.fallback_search.source_name()
                    );
                    hits = self.fallback_search.search_cases(&query, 5).await;
                }

                let cleaned = self.clean_results(&hits).await;
                let markdown = format_precedents_markdown(&cleaned);
                PrecedentFindings {
                    hits: cleaned,
                    markdown,
                    from_fallback: false,
                }
            }
            None => {
                // Concept derivation failed outright: query the fallback
                // source with the raw summary and say so.
                tracing::warn!("Concept derivation failed, using direct fallback search");
                let hits = self.fallback_search.search_cases(summary, 5).await;
                let cleaned = self.clean_results(&hits).await;
                let markdown = format!(
                    "AI fallback: using {} directly.\n\n{}",
                    self.fallback_search.source_name(),
                    format_precedents_markdown(&cleaned)
                );
                PrecedentFindings {
                    hits: cleaned,
                    markdown,
                    from_fallback: true,
                }
            }
        }
    }

    /// Asks the model for 5-7 legal concepts as a JSON array of strings.
    /// Unparsable replies degrade to splitting the reply into lines;
    /// a failed call returns None so the caller can take the direct
    /// fallback path.
    async fn derive_concepts(&self, summary: &str) -> Option<Vec<String>> {
        let prompt = format!(
            "You analyze the summary of a legal document to prepare a case-law search.\n\
             Identify 5-7 relevant legal issues or concepts.\n\
             Output a JSON array of short strings only, no commentary.\n\n\
             ## SUMMARY\n{summary}"
        );

        let reply = match self
            .llm_client
            .complete(CompletionRequest::new(prompt))
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Concept derivation call failed: {}", e);
                return None;
            }
        };

        if let Some(array) = extract_json_array(&reply) {
            let concepts: Vec<String> = array
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|v| v.as_str().map(str::to_string))
                .filter(|s| !s.trim().is_empty())
                .collect();
            if !concepts.is_empty() {
                return Some(concepts);
            }
        }

        // Loose reply: treat each non-empty line as a concept.
        let lines: Vec<String> = reply
            .lines()
            .map(|l| l.trim_matches(|c: char| c == '-' || c == '*' || c.is_whitespace()))
            .filter(|l| !l.is_empty())
            .take(7)
            .map(str::to_string)
            .collect();

        if lines.is_empty() { None } else { Some(lines) }
    }

    /// Dedup by URL, drop records with neither name nor URL, round
    /// confidence to two decimals, and optionally verify links with a
    /// HEAD request. Verification failure marks the record unverified.
    pub async fn clean_results(&self, hits: &[CaseHit]) -> Vec<CleanedCaseHit> {
        let mut seen_urls = std::collections::HashSet::new();
        let mut cleaned = Vec::new();

        for hit in hits {
            let name = hit.name.trim().to_string();
            let url = hit.url.trim().to_string();

            if name.is_empty() && url.is_empty() {
                continue;
            }
            if !url.is_empty() && !seen_urls.insert(url.clone()) {
                continue;
            }

            let verified = if self.verify_links && !url.is_empty() {
                self.link_checker.is_alive(&url).await
            } else {
                false
            };

            cleaned.push(CleanedCaseHit {
                name,
                court: hit.court.trim().to_string(),
                year: hit.year.trim().to_string(),
                url,
                confidence: (hit.confidence * 100.0).round() / 100.0,
                verified,
            });
        }

        cleaned
    }
}

pub fn format_precedents_markdown(hits: &[CleanedCaseHit]) -> String {
    if hits.is_empty() {
        return "No precedents found.".to_string();
    }

    let mut parts = vec!["### Similar Precedents Found".to_string()];
    for (idx, hit) in hits.iter().enumerate() {
        let name = if hit.name.is_empty() {
            "Unknown Case"
        } else {
            &hit.name
        };
        let mut line = format!("{}. **{}**", idx + 1, name);
        if !hit.court.is_empty() {
            line.push_str(&format!(" - {}", hit.court));
        }
        if !hit.year.is_empty() {
            line.push_str(&format!(" ({})", hit.year));
        }
        parts.push(line);
        if !hit.url.is_empty() {
            let badge = if hit.verified {
                "(verified)"
            } else {
                "(unverified)"
            };
            parts.push(format!("   [View Full Case]({}) {}", hit.url, badge));
        }
        parts.push(format!("   Confidence: {}", hit.confidence));
        parts.push(String::new());
    }
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::llm_client::LlmError;

    struct FixedLlm(Result<String, ()>);

    #[async_trait]
    impl LlmClient for FixedLlm {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
            self.0
                .clone()
                .map_err(|_| LlmError::ApiError("down".to_string()))
        }
    }

    struct FixedSearch {
        hits: Vec<CaseHit>,
        name: &'static str,
    }

    #[async_trait]
    impl LegalSearchProvider for FixedSearch {
        async fn search_cases(&self, _query: &str, _limit: usize) -> Vec<CaseHit> {
            self.hits.clone()
        }

        fn source_name(&self) -> &'static str {
            self.name
        }
    }

    struct DeadLinks;

    #[async_trait]
    impl LinkChecker for DeadLinks {
        async fn is_alive(&self, _url: &str) -> bool {
            false
        }
    }

    fn hit(name: &str, url: &str, confidence: f32) -> CaseHit {
        CaseHit {
            name: name.to_string(),
            court: "Some Court".to_string(),
            year: "2020".to_string(),
            url: url.to_string(),
            confidence,
        }
    }

    fn finder(
        llm: FixedLlm,
        primary: Vec<CaseHit>,
        fallback: Vec<CaseHit>,
    ) -> PrecedentFinderService {
        PrecedentFinderService::new(
            Arc::new(llm),
            Arc::new(FixedSearch {
                hits: primary,
                name: "Indian Kanoon",
            }),
            Arc::new(FixedSearch {
                hits: fallback,
                name: "Google Scholar",
            }),
            Arc::new(DeadLinks),
        )
        .with_link_verification(false)
    }

    #[tokio::test]
    async fn test_dedup_by_url() {
        let llm = FixedLlm(Ok("[\"contract breach\", \"damages\"]".to_string()));
        let primary = vec![
            hit("A v. B", "https://example.org/1", 1.0),
            hit("A v. B (duplicate)", "https://example.org/1", 1.0),
            hit("C v. D", "https://example.org/2", 1.0),
        ];
        let service = finder(llm, primary, vec![]);

        let findings = service.find("a contract dispute summary").await;

        assert_eq!(findings.hits.len(), 2);
        assert!(!findings.from_fallback);
    }

    #[tokio::test]
    async fn test_fallback_when_primary_unusable() {
        let llm = FixedLlm(Ok("[\"land rights\"]".to_string()));
        let primary = vec![CaseHit::error("No matching cases found.")];
        let fallback = vec![hit("E v. F", "https://scholar.example/1", 0.756)];
        let service = finder(llm, primary, fallback);

        let findings = service.find("a land dispute").await;

        assert_eq!(findings.hits.len(), 1);
        assert_eq!(findings.hits[0].confidence, 0.76);
        assert!(!findings.from_fallback);
    }

    #[tokio::test]
    async fn test_total_failure_uses_direct_fallback() {
        let llm = FixedLlm(Err(()));
        let fallback = vec![hit("G v. H", "https://scholar.example/2", 0.75)];
        let service = finder(llm, vec![], fallback);

        let findings = service.find("summary").await;

        assert!(findings.from_fallback);
        assert!(findings.markdown.starts_with("AI fallback"));
        assert_eq!(findings.hits.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_summary_short_circuits() {
        let llm = FixedLlm(Ok("unused".to_string()));
        let service = finder(llm, vec![], vec![]);

        let findings = service.find("  ").await;

        assert!(findings.hits.is_empty());
        assert!(findings.markdown.contains("No summary text provided"));
    }

    #[tokio::test]
    async fn test_loose_concept_reply_still_searches() {
        let llm = FixedLlm(Ok("- breach of contract\n- liquidated damages".to_string()));
        let primary = vec![hit("I v. J", "https://example.org/3", 1.0)];
        let service = finder(llm, primary, vec![]);

        let findings = service.find("summary").await;
        assert_eq!(findings.hits.len(), 1);
    }

    #[test]
    fn test_markdown_format() {
        let hits = vec![CleanedCaseHit {
            name: "A v. B".to_string(),
            court: "High Court".to_string(),
            year: "1999".to_string(),
            url: "https://example.org/1".to_string(),
            confidence: 0.9,
            verified: true,
        }];
        let md = format_precedents_markdown(&hits);
        assert!(md.starts_with("### Similar Precedents Found"));
        assert!(md.contains("**A v. B** - High Court (1999)"));
        assert!(md.contains("(verified)"));
    }

    #[test]
    fn test_markdown_empty() {
        assert_eq!(format_precedents_markdown(&[]), "No precedents found.");
    }
}
