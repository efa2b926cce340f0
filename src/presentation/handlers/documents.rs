use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{ExtractedContent, ExtractionMetadata, OutputFile, OutputFormat};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ExtractParams {
    #[serde(default)]
    pub output_format: Option<String>,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: ExtractData,
}

#[derive(Serialize)]
pub struct ExtractData {
    pub original_filename: String,
    pub output_filename: String,
    pub content: ExtractedContent,
    pub metadata: ExtractionMetadata,
    pub download_url: String,
}

#[derive(Serialize)]
pub struct FilesResponse {
    pub success: bool,
    pub count: usize,
    pub files: Vec<OutputFile>,
}

#[tracing::instrument(skip(state, params, multipart))]
pub async fn extract_handler(
    State(state): State<AppState>,
    Query(params): Query<ExtractParams>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let format = params
        .output_format
        .as_deref()
        .map(OutputFormat::parse_lenient)
        .unwrap_or_default();

    let (filename, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::BadRequest("No file uploaded".to_string())),
            Err(e) => {
                return Err(ApiError::BadRequest(format!(
                    "Failed to read multipart: {}",
                    e
                )));
            }
        };

        if field.name() != Some("file") && field.file_name().is_none() {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
        break (filename, data);
    };

    tracing::debug!(filename = %filename, bytes = data.len(), format = %format, "File received");

    let processed = state
        .extraction_service
        .process_upload(&filename, &data, format)
        .await?;

    Ok(Json(ExtractResponse {
        success: true,
        message: "Document processed successfully",
        data: ExtractData {
            original_filename: processed.original_filename,
            download_url: processed.output_filename.download_url(),
            output_filename: processed.output_filename.to_string(),
            content: processed.result.content,
            metadata: processed.result.metadata,
        },
    }))
}

pub async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (name, bytes) = state.extraction_service.fetch_output(&filename).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", name),
            ),
        ],
        bytes,
    ))
}

pub async fn list_files_handler(
    State(state): State<AppState>,
) -> Result<Json<FilesResponse>, ApiError> {
    let files = state.extraction_service.list_outputs().await?;

    Ok(Json(FilesResponse {
        success: true,
        count: files.len(),
        files,
    }))
}
