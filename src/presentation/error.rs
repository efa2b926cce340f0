use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{ErrorKind, ServiceError};

/// Error body shared by every endpoint. `detail` is what the web client displays.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub detail: String,
    pub kind: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("LLM service is not available. Check the API key configuration.")]
    LlmUnavailable,
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::LlmUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorKind::Validation.as_str()),
            ApiError::Service(e) => {
                let kind = e.kind();
                let status = match kind {
                    ErrorKind::Validation => StatusCode::BAD_REQUEST,
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::Upstream | ErrorKind::MalformedResponse => StatusCode::BAD_GATEWAY,
                    ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, kind.as_str())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        if status.is_server_error() {
            tracing::error!(error = %self, kind, "Request failed");
        } else {
            tracing::warn!(error = %self, kind, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                success: false,
                detail: self.to_string(),
                kind,
            }),
        )
            .into_response()
    }
}
