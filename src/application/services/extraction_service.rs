use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{DocumentExtractor, OutputStore};
use crate::domain::{
    ALLOWED_EXTENSIONS, Document, DocumentKind, ExtractionResult, OutputFile, OutputFileName,
    OutputFormat,
};

use super::service_error::ServiceError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Outcome of a processed upload.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub original_filename: String,
    pub output_filename: OutputFileName,
    pub result: ExtractionResult,
}

/// Converts uploaded documents and keeps the converted output for download.
pub struct ExtractionService {
    extractor: Arc<dyn DocumentExtractor>,
    output_store: Arc<dyn OutputStore>,
    upload_dir: PathBuf,
}

impl ExtractionService {
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        output_store: Arc<dyn OutputStore>,
        upload_dir: PathBuf,
    ) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self {
            extractor,
            output_store,
            upload_dir,
        })
    }

    /// Validates, converts and saves one upload.
    ///
    /// The upload only lives in a temp file for the duration of this call.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), format = %format))]
    pub async fn process_upload(
        &self,
        filename: &str,
        data: &[u8],
        format: OutputFormat,
    ) -> Result<ProcessedDocument, ServiceError> {
        let kind = DocumentKind::from_filename(filename).ok_or_else(|| {
            ServiceError::Validation(format!(
                "File type not allowed. Allowed types: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;

        if data.is_empty() {
            return Err(ServiceError::Validation("Uploaded file is empty".to_string()));
        }

        let document = Document::new(filename.to_string(), kind, data.len() as u64);
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

        let mut upload = tempfile::Builder::new()
            .prefix(&format!("{}_", timestamp))
            .suffix(&format!(".{}", kind.extension()))
            .tempfile_in(&self.upload_dir)?;
        upload.write_all(data)?;
        upload.flush()?;

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            path = %upload.path().display(),
            "Upload staged"
        );

        let result = self
            .extractor
            .extract(upload.path(), &document, format)
            .await?;

        let output_filename = OutputFileName::parse(format!(
            "{}_{}_extracted.{}",
            timestamp,
            document.stem(),
            format.file_extension()
        ))
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let bytes = result.content.to_file_bytes()?;
        let written = self.output_store.save(&output_filename, bytes).await?;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            output = %output_filename,
            page_count = result.metadata.page_count,
            written,
            "Document processed"
        );

        Ok(ProcessedDocument {
            original_filename: document.filename,
            output_filename,
            result,
        })
    }

    pub async fn list_outputs(&self) -> Result<Vec<OutputFile>, ServiceError> {
        Ok(self.output_store.list().await?)
    }

    pub async fn fetch_output(
        &self,
        filename: &str,
    ) -> Result<(OutputFileName, Vec<u8>), ServiceError> {
        let name = OutputFileName::parse(filename)
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        let bytes = self.output_store.fetch(&name).await?;
        Ok((name, bytes))
    }
}
