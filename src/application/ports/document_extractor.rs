use std::path::Path;

use async_trait::async_trait;

use crate::domain::{Document, ExtractionResult, OutputFormat};

/// Document conversion capability: a file on disk in, text plus metadata out.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(
        &self,
        path: &Path,
        document: &Document,
        format: OutputFormat,
    ) -> Result<ExtractionResult, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("unsupported document type: {0}")]
    UnsupportedDocument(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in document: {0}")]
    NoTextFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
