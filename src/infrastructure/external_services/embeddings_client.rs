use async_trait::async_trait;
use pgvector::Vector;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::application::ports::embedding_provider::EmbeddingProviderError;
use crate::application::ports::EmbeddingProvider;

#[derive(Serialize)]
pub struct EmbeddingsRequest {
    pub text: TextInput,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Deserialize)]
pub struct EmbeddingsResponse {
    pub success: bool,
    pub embeddings: Vec<Vector>,
}

#[derive(Debug, Clone)]
pub struct EmbeddingsClientConfig {
    pub service_url: String,
    pub model_name: String,
    pub max_retries: u32,
    pub timeout_secs: u64,
    pub backoff_factor: f64,
}

impl Default for EmbeddingsClientConfig {
    fn default() -> Self {
        let service_url = env::var("EMBEDDINGS_SERVICE_URL")
            .unwrap_or_else(|_| "https://example.workers.dev".to_string());
        let model_name =
            env::var("EMBEDDINGS_MODEL_NAME").unwrap_or_else(|_| "default".to_string());

        Self {
            service_url,
            model_name,
            max_retries: 3,
            timeout_secs: 30,
            backoff_factor: 1.5,
        }
    }
}

#[derive(Debug)]
pub enum EmbeddingsError {
    RequestError(String),
    ParseError(String),
    MaxRetriesExceeded,
}

/// Client for the external embeddings service, with retry and backoff on
/// transient failures.
#[derive(Debug, Clone)]
pub struct EmbeddingsClient {
    client: Client,
    config: EmbeddingsClientConfig,
}

impl EmbeddingsClient {
    pub fn new(config: EmbeddingsClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(EmbeddingsClientConfig::default())
    }

    pub fn model_name(&self) -> &str {
        &self.config.model_name
    }

    async fn send_request(
        &self,
        request: EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, EmbeddingsError> {
        let mut attempts = 0;
        let mut last_error = None;

        loop {
            attempts += 1;

            match self.execute_request(&request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    last_error = Some(e);

                    if attempts > self.config.max_retries {
                        break;
                    }

                    let backoff_time = Duration::from_millis(
                        (self.config.backoff_factor.powi(attempts as i32 - 1) * 1000.0) as u64,
                    );
                    tokio::time::sleep(backoff_time).await;
                }
            }
        }

        Err(last_error.unwrap_or(EmbeddingsError::MaxRetriesExceeded))
    }

    async fn execute_request(
        &self,
        request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, EmbeddingsError> {
        let response = self
            .client
            .post(&self.config.service_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| EmbeddingsError::RequestError(e.without_url().to_string()))?;

        response
            .json::<EmbeddingsResponse>()
            .await
            .map_err(|e| EmbeddingsError::ParseError(e.to_string()))
    }
}

impl From<EmbeddingsError> for EmbeddingProviderError {
    fn from(error: EmbeddingsError) -> Self {
        match error {
            EmbeddingsError::RequestError(msg) => EmbeddingProviderError::NetworkError(msg),
            EmbeddingsError::ParseError(msg) => EmbeddingProviderError::ApiError(msg),
            EmbeddingsError::MaxRetriesExceeded => EmbeddingProviderError::ServiceUnavailable,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for EmbeddingsClient {
    async fn embed(&self, text: &str) -> Result<Vector, EmbeddingProviderError> {
        let response = self
            .send_request(EmbeddingsRequest {
                text: TextInput::Single(text.to_string()),
            })
            .await?;

        response
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingProviderError::ApiError("No embeddings returned".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vector>, EmbeddingProviderError> {
        let response = self
            .send_request(EmbeddingsRequest {
                text: TextInput::Multiple(texts.to_vec()),
            })
            .await?;

        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingProviderError::ApiError(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                response.embeddings.len()
            )));
        }

        Ok(response.embeddings)
    }

    fn model_name(&self) -> String {
        self.config.model_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_construction() {
        let single = EmbeddingsRequest {
            text: TextInput::Single("Hello world".to_string()),
        };
        assert!(matches!(single.text, TextInput::Single(_)));

        let multiple = EmbeddingsRequest {
            text: TextInput::Multiple(vec!["Hello".to_string(), "World".to_string()]),
        };
        if let TextInput::Multiple(texts) = multiple.text {
            assert_eq!(texts.len(), 2);
        } else {
            panic!("expected multiple input");
        }
    }
}
