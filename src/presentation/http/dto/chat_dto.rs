use serde::{Deserialize, Serialize};

use crate::application::services::fact_checker::FactCheckEntry;
use crate::application::use_cases::chat::ChatResponse;

#[derive(Debug, Deserialize)]
pub struct ChatRequestDto {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseDto {
    pub answer: String,
    pub source: String,
    pub fact_check: Vec<FactCheckEntry>,
}

impl From<ChatResponse> for ChatResponseDto {
    fn from(response: ChatResponse) -> Self {
        Self {
            answer: response.answer,
            source: response.source,
            fact_check: response.fact_check,
        }
    }
}
