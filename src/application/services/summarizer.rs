use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::ports::llm_client::CompletionRequest;
use crate::application::services::model_output::strip_terminate;

/// Extracted text longer than this is cut before summarization to keep
/// the prompt within model limits.
const MAX_SUMMARY_INPUT_CHARS: usize = 20_000;

const TRUNCATION_MARKER: &str = "\n\n... [Text truncated for summarization]";

const SUMMARIZER_SYSTEM_PROMPT: &str = "You are an expert legal summarizer. You will be given \
text from a legal document. Provide a concise, multi-paragraph summary of its key points and \
generate a structured summary in JSON format with the following fields: case_title, court, \
year, key_issues, arguments, citations_present, judgement_summary, important_sections, \
important_clauses, key_takeaways. Do not add conversational fluff. End with TERMINATE.";

/// Single-shot summarization of extracted PDF text.
pub struct SummarizerService {
    llm_client: Arc<dyn LlmClient>,
}

impl SummarizerService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Produces the structured document summary. Failures degrade to a
    /// readable placeholder string rather than an error.
    pub async fn summarize(&self, full_text: &str) -> String {
        if full_text.trim().is_empty() {
            return "Could not summarize: No text provided or PDF was unreadable.".to_string();
        }

        let input = truncate_for_summary(full_text);
        let prompt = format!("{SUMMARIZER_SYSTEM_PROMPT}\n\n## DOCUMENT TEXT\n{input}");

        match self
            .llm_client
            .complete(CompletionRequest::new(prompt))
            .await
        {
            Ok(reply) => {
                let summary = strip_terminate(&reply);
                if summary.is_empty() {
                    "Failed to generate summary.".to_string()
                } else {
                    summary
                }
            }
            Err(e) => {
                tracing::error!("Summarization failed: {}", e);
                format!("Failed to generate summary due to error: {}", e)
            }
        }
    }
}

fn truncate_for_summary(text: &str) -> String {
    if text.len() <= MAX_SUMMARY_INPUT_CHARS {
        return text.to_string();
    }
    let mut cut = MAX_SUMMARY_INPUT_CHARS;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}{}", &text[..cut], TRUNCATION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::llm_client::LlmError;

    struct FixedLlm(String);

    #[async_trait]
    impl LlmClient for FixedLlm {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_summary_strips_sentinel() {
        let service = SummarizerService::new(Arc::new(FixedLlm(
            "A rental dispute over pet clauses. TERMINATE".to_string(),
        )));
        let summary = service.summarize("full document text").await;
        assert_eq!(summary, "A rental dispute over pet clauses.");
    }

    #[tokio::test]
    async fn test_empty_text_short_circuits() {
        let service = SummarizerService::new(Arc::new(FixedLlm("unused".to_string())));
        let summary = service.summarize("   ").await;
        assert!(summary.starts_with("Could not summarize"));
    }

    #[test]
    fn test_truncation_appends_marker() {
        let long = "a".repeat(MAX_SUMMARY_INPUT_CHARS + 100);
        let truncated = truncate_for_summary(&long);
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert!(truncated.len() < long.len());
    }
}
