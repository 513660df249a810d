use async_trait::async_trait;
use lopdf::Document;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::application::ports::document_extractor::{
    DocumentExtractionError, DocumentExtractor, ExtractedText,
};

const SCANNED_PDF_NOTICE: &str = "No text could be extracted from this PDF. This might be an \
image-based PDF (scanned document) that requires OCR processing.";

/// Text extraction from in-memory PDF bytes with per-page parallelism.
pub struct PdfExtractor {
    password: String,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self {
            password: String::new(),
        }
    }

    fn extract_pages(doc: &Document) -> (Vec<String>, i32) {
        let pages = doc.get_pages();
        let page_count = pages.len() as i32;

        let mut extracted: Vec<(u32, String)> = pages
            .into_par_iter()
            .filter_map(|(page_num, _)| {
                let text = doc.extract_text(&[page_num]).ok()?;
                let lines: Vec<&str> = text
                    .split('\n')
                    .map(str::trim_end)
                    .filter(|line| !line.is_empty())
                    .collect();
                Some((page_num, lines.join("\n")))
            })
            .collect();

        extracted.sort_by_key(|(page_num, _)| *page_num);

        (
            extracted.into_iter().map(|(_, text)| text).collect(),
            page_count,
        )
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, DocumentExtractionError> {
        let mut doc = Document::load_mem(data)
            .map_err(|e| DocumentExtractionError::CorruptedFile(e.to_string()))?;

        if doc.is_encrypted() {
            doc.decrypt(&self.password).map_err(|_| {
                DocumentExtractionError::ExtractionFailed(
                    "Failed to decrypt PDF - invalid password".to_string(),
                )
            })?;
        }

        let (page_texts, page_count) = Self::extract_pages(&doc);
        let combined = page_texts.join("\n");

        let text = if combined.trim().is_empty() {
            SCANNED_PDF_NOTICE.to_string()
        } else {
            combined
        };

        Ok(ExtractedText { text, page_count })
    }

    fn can_extract(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(".pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_extract_pdf_only() {
        let extractor = PdfExtractor::new();
        assert!(extractor.can_extract("Lease Agreement.PDF"));
        assert!(extractor.can_extract("case.pdf"));
        assert!(!extractor.can_extract("notes.docx"));
        assert!(!extractor.can_extract("pdf.txt"));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_a_corrupted_file() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract_text(b"not a pdf at all").await;
        assert!(matches!(
            result,
            Err(DocumentExtractionError::CorruptedFile(_))
        ));
    }
}
