use serde::Serialize;

use crate::application::use_cases::upload_document::UploadDocumentResponse;

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub message: String,
    pub filename: String,
    pub summary: String,
    pub page_count: i32,
    pub chunks_indexed: usize,
}

impl From<UploadDocumentResponse> for UploadResponseDto {
    fn from(response: UploadDocumentResponse) -> Self {
        Self {
            message: "File processed successfully".to_string(),
            filename: response.file_name,
            summary: response.summary,
            page_count: response.page_count,
            chunks_indexed: response.chunks_indexed,
        }
    }
}
