use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::llm_client::{CompletionRequest, LlmError};
use crate::application::ports::{LegalSearchProvider, LlmClient, WebSearchProvider};
use crate::application::services::model_output::strip_terminate;
use crate::application::services::retrieval_service::{RetrievalService, RetrievedContext};
use crate::domain::entities::CaseHit;

/// Which tool the router picked for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRoute {
    /// Greeting or closing: reply directly, no tools.
    Direct,
    /// Question about the uploaded document: local retrieval.
    Document,
    /// Case-law question: public precedent search.
    Precedent,
    /// Everything else: web search when helpful.
    General,
}

#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub answer: String,
    pub source: String,
}

const SOURCE_DOCUMENT: &str = "Uploaded Document";
const SOURCE_WEB: &str = "Web Search";
const SOURCE_GENERAL: &str = "General Knowledge";

const GREETING_WORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "thanks",
    "thank you",
    "bye",
    "goodbye",
];

const CASE_LAW_WORDS: &[&str] = &[
    "precedent",
    "case law",
    "caselaw",
    "judgment",
    "judgement",
    "ruling",
    "supreme court",
    "high court",
    " v. ",
    " vs ",
    "vs.",
    "versus",
];

const DOCUMENT_WORDS: &[&str] = &[
    "document",
    "contract",
    "agreement",
    "clause",
    "section",
    "this pdf",
    "uploaded",
    "summary",
    "lease",
    "petition",
];

/// LLM-directed tool selection among local retrieval, precedent search,
/// and web search, composing a final answer plus a source label.
pub struct ChatAgentService {
    llm_client: Arc<dyn LlmClient>,
    retrieval: Arc<RetrievalService>,
    legal_search: Arc<dyn LegalSearchProvider>,
    web_search: Arc<dyn WebSearchProvider>,
}

impl ChatAgentService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        retrieval: Arc<RetrievalService>,
        legal_search: Arc<dyn LegalSearchProvider>,
        web_search: Arc<dyn WebSearchProvider>,
    ) -> Self {
        Self {
            llm_client,
            retrieval,
            legal_search,
            web_search,
        }
    }

    /// Answers a query for a user, choosing tools per the routing policy.
    /// Never returns an error: failures degrade to readable answer text
    /// with an "Error" source label.
    pub async fn answer(
        &self,
        user_id: Uuid,
        query: &str,
        summary: Option<&str>,
        pdf_name: Option<&str>,
    ) -> ChatOutcome {
        let route = self.route(query).await;
        let mut sources: Vec<&'static str> = Vec::new();
        let mut context = String::new();

        match route {
            ToolRoute::Direct => {}
            ToolRoute::Document => {
                sources.push(SOURCE_DOCUMENT);
                match self.retrieval.retrieve(user_id, query).await {
                    Ok(RetrievedContext::Context { chunks }) => {
                        context = chunks.join("\n\n");
                    }
                    Ok(RetrievedContext::NoIndex) | Ok(RetrievedContext::NoMatch) => {
                        // No index yet: the stored summary stands in for
                        // retrieved content.
                        context = summary.unwrap_or("No summary available.").to_string();
                    }
                    Err(e) => {
                        tracing::warn!("Document retrieval failed: {}", e);
                        context = summary.unwrap_or("No summary available.").to_string();
                    }
                }
            }
            ToolRoute::Precedent => {
                let hits = self.legal_search.search_cases(query, 5).await;
                sources.push(self.legal_search.source_name());
                if hits.iter().any(CaseHit::is_usable) {
                    context = format_case_context(&hits);
                } else {
                    // Empty precedent results fall back to web search.
                    sources.push(SOURCE_WEB);
                    context = self.web_search.search(query).await;
                }
            }
            ToolRoute::General => {
                sources.push(SOURCE_WEB);
                context = self.web_search.search(query).await;
            }
        }

        let prompt = build_answer_prompt(query, summary, pdf_name, &context, route);

        let answer = match self
            .llm_client
            .complete(CompletionRequest::new(prompt))
            .await
        {
            Ok(reply) => strip_terminate(&reply),
            Err(LlmError::ServiceUnavailable) => {
                return ChatOutcome {
                    answer: "The model is currently overloaded. Please try again in a few \
                             seconds."
                        .to_string(),
                    source: "Model Service".to_string(),
                };
            }
            Err(e) => {
                tracing::error!("Chat completion failed: {}", e);
                return ChatOutcome {
                    answer: format!("Error: {}", e),
                    source: "Error".to_string(),
                };
            }
        };

        let source = if sources.is_empty() {
            SOURCE_GENERAL.to_string()
        } else {
            sources.join(" & ")
        };

        ChatOutcome { answer, source }
    }

    /// Picks a tool. Greetings are settled locally; everything else asks
    /// the model and falls back to keyword matching when the reply is
    /// unparsable.
    pub async fn route(&self, query: &str) -> ToolRoute {
        if is_greeting(query) {
            return ToolRoute::Direct;
        }

        let prompt = format!(
            "You are routing a legal assistant query to exactly one tool.\n\
             Reply with a single word:\n\
             DOCUMENT - the question is about the user's uploaded document\n\
             PRECEDENT - the question asks for case law or court precedents\n\
             WEB - the question needs current or general information from the internet\n\
             DIRECT - a greeting, closing, or something answerable without tools\n\n\
             Query: {query}\n\nTool:"
        );

        match self
            .llm_client
            .complete(CompletionRequest::new(prompt))
            .await
        {
            Ok(reply) => parse_route(&reply).unwrap_or_else(|| heuristic_route(query)),
            Err(e) => {
                tracing::warn!("Routing call failed, using heuristic: {}", e);
                heuristic_route(query)
            }
        }
    }
}

fn is_greeting(query: &str) -> bool {
    let lower = query.trim().to_lowercase();
    if lower.split_whitespace().count() > 6 {
        return false;
    }
    GREETING_WORDS.iter().any(|w| lower.starts_with(w))
}

fn parse_route(reply: &str) -> Option<ToolRoute> {
    let upper = reply.trim().to_uppercase();
    if upper.contains("DOCUMENT") {
        Some(ToolRoute::Document)
    } else if upper.contains("PRECEDENT") {
        Some(ToolRoute::Precedent)
    } else if upper.contains("WEB") {
        Some(ToolRoute::General)
    } else if upper.contains("DIRECT") {
        Some(ToolRoute::Direct)
    } else {
        None
    }
}

fn heuristic_route(query: &str) -> ToolRoute {
    let lower = query.to_lowercase();
    if CASE_LAW_WORDS.iter().any(|w| lower.contains(w)) {
        return ToolRoute::Precedent;
    }
    if DOCUMENT_WORDS.iter().any(|w| lower.contains(w)) {
        return ToolRoute::Document;
    }
    ToolRoute::General
}

fn format_case_context(hits: &[CaseHit]) -> String {
    let mut lines = vec!["Relevant precedents found:".to_string()];
    for hit in hits.iter().filter(|h| h.is_usable()) {
        lines.push(format!(
            "- {} | {} | {} | {}",
            hit.name, hit.court, hit.year, hit.url
        ));
    }
    lines.join("\n")
}

fn build_answer_prompt(
    query: &str,
    summary: Option<&str>,
    pdf_name: Option<&str>,
    context: &str,
    route: ToolRoute,
) -> String {
    let context_block = if context.is_empty() {
        String::new()
    } else {
        format!("\n## RETRIEVED CONTEXT\n{context}\n")
    };

    let style_hint = match route {
        ToolRoute::Direct => "Reply politely and briefly.",
        _ => "Be accurate, formal, and concise. Prefer fact-based responses grounded in the \
              retrieved context.",
    };

    format!(
        "You are LexiLaw, an intelligent legal AI assistant.\n\n\
         ## CONTEXT\n\
         - You are currently analyzing this document: \"{}\"\n\
         - Document summary: {}\n\
         {}\n\
         ## RESPONSE POLICY\n\
         - Output only the final answer (no steps or internal reasoning).\n\
         - {}\n\
         - End the response with TERMINATE.\n\n\
         ## USER QUERY\n{}",
        pdf_name.unwrap_or("N/A"),
        summary.unwrap_or("No summary available."),
        context_block,
        style_hint,
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pgvector::Vector;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::application::ports::embedding_provider::{
        EmbeddingProvider, EmbeddingProviderError,
    };
    use crate::domain::entities::DocumentChunk;
    use crate::domain::repositories::chunk_repository::{
        ChunkRepository, ChunkRepositoryError, ChunkSearchResult,
    };

    struct ScriptedLlm {
        replies: Mutex<VecDeque<String>>,
    }

    impl ScriptedLlm {
        fn new(replies: Vec<&str>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().map(String::from).collect()),
            }
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedLlm {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
            let mut replies = self.replies.lock().unwrap();
            replies
                .pop_front()
                .ok_or_else(|| LlmError::ApiError("script exhausted".to_string()))
        }
    }

    struct StubEmbedder;

    #[async_trait]
    impl EmbeddingProvider for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vector, EmbeddingProviderError> {
            Ok(Vector::from(vec![1.0, 0.0]))
        }

        async fn embed_batch(
            &self,
            texts: &[String],
        ) -> Result<Vec<Vector>, EmbeddingProviderError> {
            Ok(texts.iter().map(|_| Vector::from(vec![1.0, 0.0])).collect())
        }

        fn model_name(&self) -> String {
            "stub".to_string()
        }
    }

    struct StubChunks {
        chunks: Vec<String>,
    }

    #[async_trait]
    impl ChunkRepository for StubChunks {
        async fn replace_for_user(
            &self,
            _user_id: Uuid,
            _chunks: &[DocumentChunk],
        ) -> Result<(), ChunkRepositoryError> {
            Ok(())
        }

        async fn similarity_search_for_user(
            &self,
            user_id: Uuid,
            _query_vector: &Vector,
            _limit: i32,
        ) -> Result<Vec<ChunkSearchResult>, ChunkRepositoryError> {
            Ok(self
                .chunks
                .iter()
                .enumerate()
                .map(|(i, text)| ChunkSearchResult {
                    chunk: DocumentChunk::new(
                        user_id,
                        "doc.pdf".to_string(),
                        text.clone(),
                        i as i32,
                        "stub".to_string(),
                    ),
                    similarity_score: 0.9,
                })
                .collect())
        }

        async fn count_for_user(&self, _user_id: Uuid) -> Result<i64, ChunkRepositoryError> {
            Ok(self.chunks.len() as i64)
        }
    }

    struct StubLegal {
        hits: Vec<CaseHit>,
    }

    #[async_trait]
    impl LegalSearchProvider for StubLegal {
        async fn search_cases(&self, _query: &str, _limit: usize) -> Vec<CaseHit> {
            self.hits.clone()
        }

        fn source_name(&self) -> &'static str {
            "Indian Kanoon"
        }
    }

    struct StubWeb;

    #[async_trait]
    impl WebSearchProvider for StubWeb {
        async fn search(&self, _query: &str) -> String {
            "web context".to_string()
        }
    }

    fn agent(llm: ScriptedLlm, chunks: Vec<String>, hits: Vec<CaseHit>) -> ChatAgentService {
        let retrieval = Arc::new(RetrievalService::new(
            Arc::new(StubEmbedder),
            Arc::new(StubChunks { chunks }),
        ));
        ChatAgentService::new(
            Arc::new(llm),
            retrieval,
            Arc::new(StubLegal { hits }),
            Arc::new(StubWeb),
        )
    }

    #[tokio::test]
    async fn test_greeting_uses_no_tools() {
        let llm = ScriptedLlm::new(vec!["Hello! How can I help? TERMINATE"]);
        let agent = agent(llm, vec![], vec![]);

        let outcome = agent.answer(Uuid::new_v4(), "Hi there", None, None).await;

        assert_eq!(outcome.source, "General Knowledge");
        assert_eq!(outcome.answer, "Hello! How can I help?");
    }

    #[tokio::test]
    async fn test_document_query_uses_retrieval() {
        // First reply routes, second composes.
        let llm = ScriptedLlm::new(vec!["DOCUMENT", "Pets are not allowed. TERMINATE"]);
        let agent = agent(
            llm,
            vec!["The tenant shall not keep pets.".to_string()],
            vec![],
        );

        let outcome = agent
            .answer(
                Uuid::new_v4(),
                "Can I have a pet in the apartment?",
                Some("A lease agreement."),
                Some("lease.pdf"),
            )
            .await;

        assert_eq!(outcome.source, "Uploaded Document");
        assert_eq!(outcome.answer, "Pets are not allowed.");
    }

    #[tokio::test]
    async fn test_document_query_without_index_falls_back_to_summary() {
        let llm = ScriptedLlm::new(vec!["DOCUMENT", "Per the summary: a lease. TERMINATE"]);
        let agent = agent(llm, vec![], vec![]);

        let outcome = agent
            .answer(
                Uuid::new_v4(),
                "What is this document about?",
                Some("A lease agreement."),
                Some("lease.pdf"),
            )
            .await;

        assert_eq!(outcome.source, "Uploaded Document");
    }

    #[tokio::test]
    async fn test_case_law_query_invokes_precedent_tool() {
        let llm = ScriptedLlm::new(vec!["PRECEDENT", "See Kesavananda Bharati. TERMINATE"]);
        let hits = vec![CaseHit {
            name: "Kesavananda Bharati v. State of Kerala".to_string(),
            court: "Supreme Court of India".to_string(),
            year: "1973".to_string(),
            url: "https://indiankanoon.org/doc/257876/".to_string(),
            confidence: 1.0,
        }];
        let agent = agent(llm, vec![], hits);

        let outcome = agent
            .answer(Uuid::new_v4(), "Find precedents on basic structure", None, None)
            .await;

        assert_eq!(outcome.source, "Indian Kanoon");
    }

    #[tokio::test]
    async fn test_empty_precedents_fall_back_to_web() {
        let llm = ScriptedLlm::new(vec!["PRECEDENT", "From the web. TERMINATE"]);
        let hits = vec![CaseHit::error("No matching cases found.")];
        let agent = agent(llm, vec![], hits);

        let outcome = agent
            .answer(Uuid::new_v4(), "case law on drone trespass", None, None)
            .await;

        assert_eq!(outcome.source, "Indian Kanoon & Web Search");
    }

    #[tokio::test]
    async fn test_unparsable_route_uses_heuristic() {
        let llm = ScriptedLlm::new(vec![
            "I think the best option would be...",
            "Answer. TERMINATE",
        ]);
        let agent = agent(llm, vec![], vec![]);

        let outcome = agent
            .answer(Uuid::new_v4(), "What clause covers termination?", None, None)
            .await;

        // Heuristic routes "clause" to the document tool.
        assert_eq!(outcome.source, "Uploaded Document");
    }

    #[test]
    fn test_heuristic_route_case_law() {
        assert_eq!(
            heuristic_route("any precedent for this?"),
            ToolRoute::Precedent
        );
        assert_eq!(heuristic_route("weather in Delhi"), ToolRoute::General);
    }

    #[test]
    fn test_is_greeting() {
        assert!(is_greeting("Hello"));
        assert!(is_greeting("thanks a lot"));
        assert!(!is_greeting("hi court ruled in Kesavananda about property rights in 1973"));
        assert!(!is_greeting("What does clause 4 say?"));
    }
}
