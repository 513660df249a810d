use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::llm_client::CompletionRequest;
use crate::application::ports::LlmClient;
use crate::application::services::model_output::extract_json_array;

/// One assessed claim from the assistant's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckFinding {
    pub statement: String,
    pub supported: bool,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub evidence: String,
}

/// Fact-check output entry. Failures surface as explicit error records
/// inside the list instead of an error return, matching the soft-failure
/// policy of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactCheckEntry {
    Claim(FactCheckFinding),
    Error { error: String },
}

impl FactCheckEntry {
    pub fn error(message: impl Into<String>) -> Self {
        FactCheckEntry::Error {
            error: message.into(),
        }
    }

    pub fn as_claim(&self) -> Option<&FactCheckFinding> {
        match self {
            FactCheckEntry::Claim(finding) => Some(finding),
            FactCheckEntry::Error { .. } => None,
        }
    }
}

/// Evidence chunks beyond this count are dropped to keep the prompt small.
const MAX_EVIDENCE_CHUNKS: usize = 8;

const GREETING_MARKERS: &[&str] = &[
    "hello",
    "hi ",
    "hey",
    "good morning",
    "good evening",
    "how can i help",
    "how can i assist",
];

/// Validates a generated answer against retrieved evidence chunks with a
/// single holistic LLM call.
pub struct FactCheckService {
    llm_client: Arc<dyn LlmClient>,
}

impl FactCheckService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn check(&self, answer: &str, evidence_chunks: &[String]) -> Vec<FactCheckEntry> {
        if answer.trim().is_empty() {
            return vec![FactCheckEntry::error(
                "No answer provided for fact checking.",
            )];
        }
        if evidence_chunks.is_empty() {
            return vec![FactCheckEntry::error(
                "No evidence chunks found to verify facts.",
            )];
        }

        let evidence_text = evidence_chunks
            .iter()
            .take(MAX_EVIDENCE_CHUNKS)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n\n");

        let cleaned_answer = filter_trivial_lines(answer);
        let prompt = build_fact_check_prompt(&cleaned_answer, &evidence_text);

        let reply = match self
            .llm_client
            .complete(CompletionRequest::new(prompt))
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Fact-check call failed: {}", e);
                return vec![FactCheckEntry::error(format!("Fact-checker error: {}", e))];
            }
        };

        parse_fact_check_reply(&reply)
    }
}

/// Removes greetings, short fillers, and trivial lines from the answer
/// before sending it to the model. Falls back to the original text when
/// everything was filtered.
pub fn filter_trivial_lines(text: &str) -> String {
    let useful: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            !GREETING_MARKERS.iter().any(|m| lower.contains(m))
        })
        .filter(|line| line.split_whitespace().count() > 3)
        .collect();

    if useful.is_empty() {
        text.to_string()
    } else {
        useful.join("\n\n")
    }
}

fn build_fact_check_prompt(answer: &str, evidence: &str) -> String {
    format!(
        "You are a FACT-CHECKER specializing in Indian legal content.\n\
         Check whether the factual claims in the assistant's answer are supported by the \
         provided evidence (retrieved from legal documents or judgments).\n\n\
         ## INSTRUCTIONS\n\
         1. Examine the full answer holistically, not sentence by sentence.\n\
         2. Identify only meaningful factual statements (ignore greetings or opinions).\n\
         3. For each factual statement:\n\
            - Determine whether it is supported by the evidence.\n\
            - If supported, include a short direct quote from the evidence (max 200 chars).\n\
            - If unsupported, write \"NO SUPPORT IN RETRIEVED EVIDENCE\".\n\
            - Provide a confidence score between 0.00 and 1.00.\n\
         4. Return valid JSON only, in this structure:\n\
         [{{\"statement\": \"...\", \"supported\": true, \"confidence\": 0.00, \
         \"evidence\": \"...\"}}]\n\n\
         ## ASSISTANT ANSWER\n{answer}\n\n\
         ## EVIDENCE\n{evidence}\n\n\
         Output ONLY JSON, without markdown or commentary."
    )
}

fn parse_fact_check_reply(reply: &str) -> Vec<FactCheckEntry> {
    let Some(array) = extract_json_array(reply) else {
        return vec![FactCheckEntry::error(
            "Fact-checker returned non-JSON output",
        )];
    };

    match serde_json::from_value::<Vec<FactCheckEntry>>(array) {
        Ok(entries) if !entries.is_empty() => entries,
        Ok(_) => vec![FactCheckEntry::error("Fact-checker returned no claims")],
        Err(e) => vec![FactCheckEntry::error(format!(
            "Fact-checker output did not match the expected shape: {}",
            e
        ))],
    }
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

    fn chunks(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_evidence_yields_error_record() {
        let service = FactCheckService::new(Arc::new(FixedLlm("unused".to_string())));
        let entries = service.check("Some answer with claims here", &[]).await;

        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], FactCheckEntry::Error { .. }));
    }

    #[tokio::test]
    async fn test_fenced_json_reply_is_parsed() {
        let reply = "```json\n[{\"statement\": \"The lease forbids pets\", \
                     \"supported\": true, \"confidence\": 0.92, \
                     \"evidence\": \"tenant shall not keep pets\"}]\n```";
        let service = FactCheckService::new(Arc::new(FixedLlm(reply.to_string())));

        let entries = service
            .check(
                "The lease forbids pets in the apartment building.",
                &chunks(&["The tenant shall not keep pets."]),
            )
            .await;

        let claim = entries[0].as_claim().unwrap();
        assert!(claim.supported);
        assert!((claim.confidence - 0.92).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_non_json_reply_yields_error_record() {
        let service =
            FactCheckService::new(Arc::new(FixedLlm("I cannot verify this.".to_string())));

        let entries = service
            .check(
                "A statement that needs checking today",
                &chunks(&["evidence"]),
            )
            .await;

        assert!(matches!(entries[0], FactCheckEntry::Error { .. }));
    }

    #[test]
    fn test_filter_trivial_lines() {
        let answer = "Hello! How can I help?\nThe contract requires 30 days notice.\nThanks";
        let filtered = filter_trivial_lines(answer);
        assert_eq!(filtered, "The contract requires 30 days notice.");
    }

    #[test]
    fn test_filter_keeps_original_when_all_trivial() {
        let answer = "Hi there!";
        assert_eq!(filter_trivial_lines(answer), "Hi there!");
    }

    #[test]
    fn test_error_entry_serializes_with_error_key() {
        let entry = FactCheckEntry::error("boom");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["error"], "boom");
    }
}
