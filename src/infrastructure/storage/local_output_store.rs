use std::path::PathBuf;
use std::sync::Arc;

use futures::TryStreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{OutputStore, OutputStoreError};
use crate::domain::{OutputFile, OutputFileName};

/// Output directory on the local filesystem.
pub struct LocalOutputStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalOutputStore {
    pub fn new(base_path: PathBuf) -> Result<Self, OutputStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| OutputStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    /// Store location for `name`, kept verbatim so the file on disk and the
    /// listed name match the output filename exactly.
    fn location(name: &OutputFileName) -> Result<StorePath, object_store::path::Error> {
        StorePath::parse(name.as_str())
    }
}

#[async_trait::async_trait]
impl OutputStore for LocalOutputStore {
    async fn save(&self, name: &OutputFileName, bytes: Vec<u8>) -> Result<u64, OutputStoreError> {
        let size = bytes.len() as u64;
        let location =
            Self::location(name).map_err(|e| OutputStoreError::WriteFailed(e.to_string()))?;
        self.inner
            .put(&location, PutPayload::from(bytes))
            .await
            .map_err(|e| OutputStoreError::WriteFailed(e.to_string()))?;
        Ok(size)
    }

    async fn fetch(&self, name: &OutputFileName) -> Result<Vec<u8>, OutputStoreError> {
        let location =
            Self::location(name).map_err(|e| OutputStoreError::ReadFailed(e.to_string()))?;
        let result = self
            .inner
            .get(&location)
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    OutputStoreError::NotFound(name.to_string())
                }
                other => OutputStoreError::ReadFailed(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| OutputStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn list(&self) -> Result<Vec<OutputFile>, OutputStoreError> {
        let metas: Vec<_> = self
            .inner
            .list(None)
            .try_collect()
            .await
            .map_err(|e| OutputStoreError::ListFailed(e.to_string()))?;

        let mut files: Vec<OutputFile> = metas
            .into_iter()
            .filter_map(|meta| {
                let name = OutputFileName::parse(meta.location.filename()?).ok()?;
                Some(OutputFile {
                    download_url: name.download_url(),
                    filename: name.as_str().to_string(),
                    size: meta.size as u64,
                    created: meta.last_modified,
                })
            })
            .collect();

        files.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(files)
    }
}
