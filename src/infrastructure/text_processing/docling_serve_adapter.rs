use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{DocumentExtractor, ExtractorError};
use crate::domain::{
    Document, ExtractedContent, ExtractionMetadata, ExtractionResult, OutputFormat,
};

/// Delegates conversion to a docling-serve instance over HTTP.
pub struct DoclingServeAdapter {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ConvertResponse {
    pub document: ConvertedDocument,
    pub status: String,
    #[serde(default)]
    pub errors: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertedDocument {
    #[serde(default)]
    pub md_content: Option<String>,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub json_content: Option<Value>,
}

impl DoclingServeAdapter {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn target_format(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl ConvertResponse {
    /// Maps the service payload onto an [`ExtractionResult`] for `format`.
    ///
    /// The page count comes from the `pages` map of the docling JSON export,
    /// which is always requested alongside the target format.
    pub fn into_result(self, format: OutputFormat) -> Result<ExtractionResult, ExtractorError> {
        if self.status != "success" && self.status != "partial_success" {
            let detail = if self.errors.is_empty() {
                "no error detail".to_string()
            } else {
                Value::Array(self.errors).to_string()
            };
            return Err(ExtractorError::ExtractionFailed(format!(
                "conversion status {}: {}",
                self.status, detail
            )));
        }

        let page_count = self
            .document
            .json_content
            .as_ref()
            .and_then(|json| json.get("pages"))
            .map(|pages| match pages {
                Value::Object(map) => map.len(),
                Value::Array(list) => list.len(),
                _ => 0,
            })
            .unwrap_or(0);

        let missing = || {
            ExtractorError::ExtractionFailed(format!("response has no {} content", format))
        };

        let content = match format {
            OutputFormat::Markdown => {
                ExtractedContent::Text(self.document.md_content.ok_or_else(missing)?)
            }
            OutputFormat::Text => {
                ExtractedContent::Text(self.document.text_content.ok_or_else(missing)?)
            }
            OutputFormat::Json => {
                ExtractedContent::Structured(self.document.json_content.ok_or_else(missing)?)
            }
        };

        Ok(ExtractionResult {
            content,
            metadata: ExtractionMetadata { page_count, format },
        })
    }
}

#[async_trait]
impl DocumentExtractor for DoclingServeAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = %format
        )
    )]
    async fn extract(
        &self,
        path: &Path,
        document: &Document,
        format: OutputFormat,
    ) -> Result<ExtractionResult, ExtractorError> {
        let data = tokio::fs::read(path).await?;

        let file_part = Part::bytes(data)
            .file_name(document.filename.clone())
            .mime_str(document.kind.as_mime())
            .map_err(|e| ExtractorError::ExtractionFailed(e.to_string()))?;

        let mut form = Form::new()
            .part("files", file_part)
            .text("to_formats", Self::target_format(format));
        if format != OutputFormat::Json {
            form = form.text("to_formats", "json");
        }

        let response = self
            .client
            .post(format!("{}/v1/convert/file", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractorError::ExtractionFailed(format!("docling request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ExtractorError::ExtractionFailed(format!(
                "docling returned {status}: {text}"
            )));
        }

        let converted: ConvertResponse = response.json().await.map_err(|e| {
            ExtractorError::ExtractionFailed(format!("docling JSON parse error: {e}"))
        })?;

        let result = converted.into_result(format)?;
        tracing::info!(page_count = result.metadata.page_count, "Docling conversion complete");
        Ok(result)
    }
}
