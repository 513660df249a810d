use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::DocumentExtractor;
use crate::application::services::{DocumentIndexerService, SummarizerService};
use crate::domain::repositories::UserRepository;

#[derive(Debug)]
pub enum UploadDocumentError {
    UnsupportedFileType(String),
    EmptyFile,
    ExtractionError(String),
    UserNotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for UploadDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadDocumentError::UnsupportedFileType(name) => {
                write!(f, "Only PDF files are supported, got: {}", name)
            }
            UploadDocumentError::EmptyFile => write!(f, "Uploaded file is empty"),
            UploadDocumentError::ExtractionError(msg) => write!(f, "Extraction error: {}", msg),
            UploadDocumentError::UserNotFound(id) => write!(f, "User not found: {}", id),
            UploadDocumentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UploadDocumentError {}

#[derive(Debug, Clone)]
pub struct UploadDocumentRequest {
    pub user_id: Uuid,
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadDocumentResponse {
    pub file_name: String,
    pub summary: String,
    pub page_count: i32,
    pub chunks_indexed: usize,
}

/// Upload pipeline: extract the PDF text, summarize it, store the
/// summary on the user row, and rebuild the user's vector index.
pub struct UploadDocumentUseCase {
    user_repository: Arc<dyn UserRepository>,
    document_extractor: Arc<dyn DocumentExtractor>,
    summarizer: Arc<SummarizerService>,
    indexer: Arc<DocumentIndexerService>,
}

impl UploadDocumentUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        document_extractor: Arc<dyn DocumentExtractor>,
        summarizer: Arc<SummarizerService>,
        indexer: Arc<DocumentIndexerService>,
    ) -> Self {
        Self {
            user_repository,
            document_extractor,
            summarizer,
            indexer,
        }
    }

    pub async fn execute(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<UploadDocumentResponse, UploadDocumentError> {
        if !self.document_extractor.can_extract(&request.file_name) {
            return Err(UploadDocumentError::UnsupportedFileType(request.file_name));
        }
        if request.data.is_empty() {
            return Err(UploadDocumentError::EmptyFile);
        }

        self.user_repository
            .find_by_id(request.user_id)
            .await
            .map_err(|e| UploadDocumentError::RepositoryError(e.to_string()))?
            .ok_or(UploadDocumentError::UserNotFound(request.user_id))?;

        let extracted = self
            .document_extractor
            .extract_text(&request.data)
            .await
            .map_err(|e| UploadDocumentError::ExtractionError(e.to_string()))?;

        let summary = self.summarizer.summarize(&extracted.text).await;

        self.user_repository
            .update_current_document(request.user_id, &summary, &request.file_name)
            .await
            .map_err(|e| UploadDocumentError::RepositoryError(e.to_string()))?;

        // Index failures leave the summary usable, so the upload still
        // succeeds with a zero chunk count.
        let chunks_indexed = match self
            .indexer
            .rebuild_index(request.user_id, &request.file_name, &extracted.text)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(
                    "Index rebuild failed for user {}: {}",
                    request.user_id,
                    e
                );
                0
            }
        };

        tracing::info!(
            "Processed upload {} for user {}: {} pages, {} chunks",
            request.file_name,
            request.user_id,
            extracted.page_count,
            chunks_indexed
        );

        Ok(UploadDocumentResponse {
            file_name: request.file_name,
            summary,
            page_count: extracted.page_count,
            chunks_indexed,
        })
    }
}
