pub mod auth_dto;
pub mod chat_dto;
pub mod document_dto;
pub mod fact_check_dto;
pub mod lawyer_dto;
pub mod precedent_dto;

use serde::Serialize;

pub use auth_dto::{
    ChatMessageDto, LoginRequestDto, LoginResponseDto, SignupRequestDto, SignupResponseDto,
};
pub use chat_dto::{ChatRequestDto, ChatResponseDto};
pub use document_dto::UploadResponseDto;
pub use fact_check_dto::{FactCheckRecordDto, FactHistoryResponseDto};
pub use lawyer_dto::{FindLawyersRequestDto, FindLawyersResponseDto, LawyerDto};
pub use precedent_dto::{
    FindPrecedentsRequestDto, FindPrecedentsResponseDto, StoredPrecedentsResponseDto,
};

/// Error payload for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponseDto {
    pub detail: String,
}

impl ErrorResponseDto {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub version: String,
}
