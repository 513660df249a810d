use async_trait::async_trait;

#[derive(Debug)]
pub enum LlmError {
    NetworkError(String),
    ApiError(String),
    ServiceUnavailable,
    EmptyResponse,
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LlmError::ApiError(msg) => write!(f, "API error: {}", msg),
            LlmError::ServiceUnavailable => write!(f, "Model temporarily unavailable"),
            LlmError::EmptyResponse => write!(f, "Model returned no text"),
        }
    }
}

impl std::error::Error for LlmError {}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.3,
        }
    }
}

/// Single-shot text completion against the configured LLM.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}
