use async_trait::async_trait;

#[derive(Debug)]
pub enum DocumentExtractionError {
    CorruptedFile(String),
    ExtractionFailed(String),
    UnsupportedFormat(String),
}

impl std::fmt::Display for DocumentExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentExtractionError::CorruptedFile(msg) => write!(f, "Corrupted file: {}", msg),
            DocumentExtractionError::ExtractionFailed(msg) => {
                write!(f, "Extraction failed: {}", msg)
            }
            DocumentExtractionError::UnsupportedFormat(msg) => {
                write!(f, "Unsupported format: {}", msg)
            }
        }
    }
}

impl std::error::Error for DocumentExtractionError {}

#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: i32,
}

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, DocumentExtractionError>;

    fn can_extract(&self, file_name: &str) -> bool;
}
