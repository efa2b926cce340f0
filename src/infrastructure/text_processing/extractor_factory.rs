use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DocumentExtractor;
use crate::domain::DocumentKind;
use crate::presentation::config::{ExtractionSettings, ExtractorProvider};

use super::composite_extractor::CompositeExtractor;
use super::docling_serve_adapter::DoclingServeAdapter;
use super::local_pdf_adapter::LocalPdfAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("extractor initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn DocumentExtractor>, ExtractorFactoryError> {
        match settings.provider {
            ExtractorProvider::Docling => {
                tracing::info!(url = %settings.docling_url, "Using docling-serve extractor");
                let adapter = DoclingServeAdapter::new(
                    &settings.docling_url,
                    Duration::from_secs(settings.request_timeout_secs),
                )
                .map_err(|e| ExtractorFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(adapter))
            }
            ExtractorProvider::Local => {
                tracing::info!("Using local PDF extractor; .docx and .doc uploads will be rejected");
                let pdf: Arc<dyn DocumentExtractor> = Arc::new(LocalPdfAdapter::new());
                Ok(Arc::new(CompositeExtractor::new(vec![(
                    DocumentKind::Pdf,
                    pdf,
                )])))
            }
        }
    }
}
