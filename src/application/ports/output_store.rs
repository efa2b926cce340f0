use async_trait::async_trait;

use crate::domain::{OutputFile, OutputFileName};

/// Where extracted documents are kept for later download.
#[async_trait]
pub trait OutputStore: Send + Sync {
    async fn save(&self, name: &OutputFileName, bytes: Vec<u8>) -> Result<u64, OutputStoreError>;

    async fn fetch(&self, name: &OutputFileName) -> Result<Vec<u8>, OutputStoreError>;

    async fn list(&self) -> Result<Vec<OutputFile>, OutputStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutputStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("listing failed: {0}")]
    ListFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
