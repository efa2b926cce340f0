use crate::application::ports::{ExtractorError, LlmClientError, OutputStoreError};

use super::response_normalizer::NormalizeError;

/// Failure categories callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Upstream,
    MalformedResponse,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::Upstream => "upstream_error",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal_error",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractorError),
    #[error("malformed model response: {0}")]
    MalformedResponse(#[from] NormalizeError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage: {0}")]
    Storage(OutputStoreError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_)
            | ServiceError::Extraction(ExtractorError::UnsupportedDocument(_)) => {
                ErrorKind::Validation
            }
            ServiceError::Completion(_) | ServiceError::Extraction(_) => ErrorKind::Upstream,
            ServiceError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Storage(_) | ServiceError::Io(_) | ServiceError::Serialization(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl From<OutputStoreError> for ServiceError {
    fn from(err: OutputStoreError) -> Self {
        match err {
            OutputStoreError::NotFound(name) => ServiceError::NotFound(name),
            other => ServiceError::Storage(other),
        }
    }
}
