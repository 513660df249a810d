use serde::{Deserialize, Serialize};

use crate::application::services::precedent_finder::CleanedCaseHit;
use crate::application::use_cases::find_precedents::FindPrecedentsResponse;
use crate::application::use_cases::get_precedents::GetPrecedentsResponse;

#[derive(Debug, Default, Deserialize)]
pub struct FindPrecedentsRequestDto {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FindPrecedentsResponseDto {
    pub precedents: Vec<CleanedCaseHit>,
    pub markdown: String,
    pub from_fallback: bool,
}

impl From<FindPrecedentsResponse> for FindPrecedentsResponseDto {
    fn from(response: FindPrecedentsResponse) -> Self {
        Self {
            precedents: response.hits,
            markdown: response.markdown,
            from_fallback: response.from_fallback,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoredPrecedentsResponseDto {
    pub formatted_markdown: String,
    pub precedents: Vec<serde_json::Value>,
}

impl From<GetPrecedentsResponse> for StoredPrecedentsResponseDto {
    fn from(response: GetPrecedentsResponse) -> Self {
        Self {
            formatted_markdown: response.formatted_markdown,
            precedents: response.precedents,
        }
    }
}
