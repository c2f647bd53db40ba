//! Document text extraction. Turns uploaded resume bytes into plain text.
//!
//! Extraction is CPU-bound; handlers call `extract_blocking`, which runs the
//! extractor on tokio's blocking pool.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("uploaded document is empty")]
    Empty,

    #[error("uploaded document is not a PDF")]
    NotPdf,

    #[error("could not extract text from PDF: {0}")]
    Extraction(String),
}

pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, document: &[u8]) -> Result<String, DocumentParseError>;
}

/// Default extractor backed by the `pdf-extract` crate. Pages are concatenated.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, document: &[u8]) -> Result<String, DocumentParseError> {
        check_pdf_header(document)?;

        let text = pdf_extract::extract_text_from_mem(document)
            .map_err(|e| DocumentParseError::Extraction(e.to_string()))?;

        debug!(bytes = document.len(), chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}

fn check_pdf_header(document: &[u8]) -> Result<(), DocumentParseError> {
    if document.is_empty() {
        return Err(DocumentParseError::Empty);
    }
    if !document.starts_with(PDF_MAGIC) {
        return Err(DocumentParseError::NotPdf);
    }
    Ok(())
}

/// Runs `extractor` on the blocking pool. A panic inside the PDF library is
/// reported as an extraction failure rather than taking the worker down.
pub async fn extract_blocking(
    extractor: Arc<dyn TextExtractor>,
    document: bytes::Bytes,
) -> Result<String, DocumentParseError> {
    tokio::task::spawn_blocking(move || extractor.extract_text(&document))
        .await
        .unwrap_or_else(|join_err| {
            warn!("Text extraction task failed: {join_err}");
            Err(DocumentParseError::Extraction(
                "extractor aborted while reading the document".to_string(),
            ))
        })
}
