use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{Document, DocumentKind, ExtractionResult, OutputFormat};

/// Routes each document to the extractor registered for its kind.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentKind, Arc<dyn DocumentExtractor>>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(DocumentKind, Arc<dyn DocumentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DocumentExtractor for CompositeExtractor {
    async fn extract(
        &self,
        path: &Path,
        document: &Document,
        format: OutputFormat,
    ) -> Result<ExtractionResult, ExtractorError> {
        let adapter = self.adapters.get(&document.kind).ok_or_else(|| {
            ExtractorError::UnsupportedDocument(document.kind.as_mime().to_string())
        })?;

        adapter.extract(path, document, format).await
    }
}
