use std::sync::Arc;

use uuid::Uuid;

use crate::application::services::fact_checker::FactCheckEntry;
use crate::application::services::model_output::extract_json_array;
use crate::application::services::retrieval_service::RetrievedContext;
use crate::application::services::{ChatAgentService, FactCheckService, RetrievalService};
use crate::domain::entities::{ChatMessage, FactCheckRecord, Sender};
use crate::domain::repositories::{ChatRepository, FactCheckRepository, UserRepository};

#[derive(Debug)]
pub enum ChatError {
    EmptyMessage,
    UserNotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::EmptyMessage => write!(f, "Message cannot be empty"),
            ChatError::UserNotFound(id) => write!(f, "User not found: {}", id),
            ChatError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ChatError {}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub user_id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub answer: String,
    pub source: String,
    pub fact_check: Vec<FactCheckEntry>,
}

/// One chat turn: persist the user message, run the agent, persist the
/// reply, then fact-check the reply against retrieved evidence.
pub struct ChatUseCase {
    user_repository: Arc<dyn UserRepository>,
    chat_repository: Arc<dyn ChatRepository>,
    fact_check_repository: Arc<dyn FactCheckRepository>,
    chat_agent: Arc<ChatAgentService>,
    retrieval: Arc<RetrievalService>,
    fact_checker: Arc<FactCheckService>,
}

impl ChatUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        chat_repository: Arc<dyn ChatRepository>,
        fact_check_repository: Arc<dyn FactCheckRepository>,
        chat_agent: Arc<ChatAgentService>,
        retrieval: Arc<RetrievalService>,
        fact_checker: Arc<FactCheckService>,
    ) -> Self {
        Self {
            user_repository,
            chat_repository,
            fact_check_repository,
            chat_agent,
            retrieval,
            fact_checker,
        }
    }

    pub async fn execute(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user = self
            .user_repository
            .find_by_id(request.user_id)
            .await
            .map_err(|e| ChatError::RepositoryError(e.to_string()))?
            .ok_or(ChatError::UserNotFound(request.user_id))?;

        self.chat_repository
            .append(&ChatMessage::new(
                request.user_id,
                Sender::User,
                message.to_string(),
                None,
            ))
            .await
            .map_err(|e| ChatError::RepositoryError(e.to_string()))?;

        let outcome = self
            .chat_agent
            .answer(
                request.user_id,
                message,
                user.current_summary(),
                user.current_pdf_name(),
            )
            .await;

        let answer = format_case_json_as_markdown(&outcome.answer);

        self.chat_repository
            .append(&ChatMessage::new(
                request.user_id,
                Sender::Assistant,
                answer.clone(),
                Some(outcome.source.clone()),
            ))
            .await
            .map_err(|e| ChatError::RepositoryError(e.to_string()))?;

        let evidence = self.collect_evidence(request.user_id, message).await;
        let fact_check = self.fact_checker.check(&answer, &evidence).await;
        self.persist_fact_checks(request.user_id, &fact_check)
            .await;

        Ok(ChatResponse {
            answer,
            source: outcome.source,
            fact_check,
        })
    }

    /// Top-ranked chunks for the query. Retrieval problems mean no
    /// evidence, never a failed chat turn.
    async fn collect_evidence(&self, user_id: Uuid, query: &str) -> Vec<String> {
        match self.retrieval.retrieve(user_id, query).await {
            Ok(RetrievedContext::Context { chunks }) => chunks,
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::warn!("Evidence retrieval failed for user {}: {}", user_id, e);
                Vec::new()
            }
        }
    }

    /// Claim entries land in the fact-check history; error records only
    /// travel back in the response.
    async fn persist_fact_checks(&self, user_id: Uuid, entries: &[FactCheckEntry]) {
        let records: Vec<FactCheckRecord> = entries
            .iter()
            .filter_map(FactCheckEntry::as_claim)
            .map(|claim| {
                FactCheckRecord::new(
                    user_id,
                    claim.statement.clone(),
                    claim.supported,
                    claim.confidence,
                    Some(claim.evidence.clone()).filter(|e| !e.is_empty()),
                )
            })
            .collect();

        if records.is_empty() {
            return;
        }
        if let Err(e) = self.fact_check_repository.append_batch(&records).await {
            tracing::warn!("Could not persist fact checks for user {}: {}", user_id, e);
        }
    }
}

/// Answers that are a raw JSON array of case objects get rewritten as a
/// readable numbered list. Anything else passes through untouched.
pub fn format_case_json_as_markdown(answer: &str) -> String {
    let trimmed = answer.trim();
    if !trimmed.starts_with('[') && !trimmed.starts_with("```") {
        return answer.to_string();
    }

    let Some(array) = extract_json_array(trimmed) else {
        return answer.to_string();
    };
    let Some(items) = array.as_array() else {
        return answer.to_string();
    };

    let mut lines = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            return answer.to_string();
        };
        let name = obj
            .get("name")
            .or_else(|| obj.get("case_name"))
            .and_then(|v| v.as_str());
        let Some(name) = name else {
            return answer.to_string();
        };

        let mut line = format!("{}. **{}**", idx + 1, name);
        if let Some(court) = obj.get("court").and_then(|v| v.as_str()) {
            if !court.is_empty() {
                line.push_str(&format!(" - {}", court));
            }
        }
        if let Some(year) = obj.get("year").and_then(|v| v.as_str()) {
            if !year.is_empty() {
                line.push_str(&format!(" ({})", year));
            }
        }
        lines.push(line);
        if let Some(url) = obj.get("url").and_then(|v| v.as_str()) {
            if !url.is_empty() {
                lines.push(format!("   [View Full Case]({})", url));
            }
        }
    }

    if lines.is_empty() {
        answer.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_answers_pass_through() {
        let answer = "The notice period is 30 days per clause 4.";
        assert_eq!(format_case_json_as_markdown(answer), answer);
    }

    #[test]
    fn test_case_array_becomes_numbered_list() {
        let answer = r#"[{"name": "A v. B", "court": "Supreme Court of India",
                          "year": "1973", "url": "https://indiankanoon.org/doc/1/"}]"#;
        let formatted = format_case_json_as_markdown(answer);
        assert!(formatted.starts_with("1. **A v. B** - Supreme Court of India (1973)"));
        assert!(formatted.contains("[View Full Case](https://indiankanoon.org/doc/1/)"));
    }

    #[test]
    fn test_non_case_array_passes_through() {
        let answer = r#"[1, 2, 3]"#;
        assert_eq!(format_case_json_as_markdown(answer), answer);
    }

    #[test]
    fn test_fenced_case_array_is_formatted() {
        let answer = "```json\n[{\"case_name\": \"C v. D\"}]\n```";
        let formatted = format_case_json_as_markdown(answer);
        assert_eq!(formatted, "1. **C v. D**");
    }
}
