use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::application::ports::llm_client::{CompletionRequest, LlmError};
use crate::application::ports::LlmClient;

const GENERATION_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Waits this long between retries when the model reports overload.
const RETRY_DELAY: Duration = Duration::from_secs(3);
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl GeminiClientConfig {
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| LlmError::ApiError("GEMINI_API_KEY not set".to_string()))?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        Ok(Self {
            api_key,
            model,
            timeout_secs: 60,
        })
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini text generation over HTTP. Overload responses are retried a
/// fixed number of times before surfacing as `ServiceUnavailable`.
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, LlmError> {
        let config = GeminiClientConfig::from_env()?;
        Self::new(config).map_err(|e| LlmError::NetworkError(e.to_string()))
    }

    async fn execute(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GENERATION_ENDPOINT, self.config.model, self.config.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(LlmError::ServiceUnavailable);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            if detail.contains("UNAVAILABLE") || detail.contains("overloaded") {
                return Err(LlmError::ServiceUnavailable);
            }
            return Err(LlmError::ApiError(format!("HTTP {}: {}", status, detail)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ApiError(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .flatten()
            .filter_map(|c| c.content)
            .filter_map(|c| c.parts)
            .flatten()
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let mut attempts = 0;

        loop {
            attempts += 1;
            match self.execute(&request).await {
                Err(LlmError::ServiceUnavailable) if attempts < MAX_ATTEMPTS => {
                    tracing::warn!(
                        "Model overloaded, retrying (attempt {}/{})",
                        attempts,
                        MAX_ATTEMPTS
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                other => return other,
            }
        }
    }
}
