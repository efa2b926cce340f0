use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{
    Document, DocumentKind, ExtractedContent, ExtractionMetadata, ExtractionResult, OutputFormat,
};

use super::text_sanitizer::sanitize_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// In-process PDF text extraction for deployments without a conversion service.
#[derive(Default)]
pub struct LocalPdfAdapter;

struct PageText {
    page: u32,
    text: String,
}

impl LocalPdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<(usize, Vec<PageText>), ExtractorError> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for page in &page_numbers {
            let raw = doc.extract_text(&[*page]).unwrap_or_default();
            let text = sanitize_page_text(&raw);
            if !text.is_empty() {
                pages.push(PageText { page: *page, text });
            }
        }

        Ok((page_numbers.len(), pages))
    }
}

#[async_trait]
impl DocumentExtractor for LocalPdfAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn extract(
        &self,
        path: &Path,
        document: &Document,
        format: OutputFormat,
    ) -> Result<ExtractionResult, ExtractorError> {
        if document.kind != DocumentKind::Pdf {
            return Err(ExtractorError::UnsupportedDocument(
                document.kind.as_mime().to_string(),
            ));
        }

        let data = tokio::fs::read(path).await?;

        let (page_count, pages) = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data)),
        )
        .await
        .map_err(|_| ExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count, text_pages = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(ExtractorError::NoTextFound(document.filename.clone()));
        }

        let content = match format {
            OutputFormat::Json => ExtractedContent::Structured(json!({
                "pages": pages
                    .iter()
                    .map(|p| json!({ "page": p.page, "text": p.text }))
                    .collect::<Vec<_>>(),
            })),
            OutputFormat::Markdown | OutputFormat::Text => ExtractedContent::Text(
                pages
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            ),
        };

        Ok(ExtractionResult {
            content,
            metadata: ExtractionMetadata { page_count, format },
        })
    }
}
