use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flat filename inside the output directory. Never contains a path separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFileName(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OutputFileNameError {
    #[error("filename is empty")]
    Empty,
    #[error("filename must not contain path components: {0}")]
    PathComponent(String),
}

impl OutputFileName {
    pub fn parse(name: impl Into<String>) -> Result<Self, OutputFileNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OutputFileNameError::Empty);
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(OutputFileNameError::PathComponent(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn download_url(&self) -> String {
        format!("/download/{}", self.0)
    }
}

impl fmt::Display for OutputFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Listing entry for a saved extraction output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFile {
    pub filename: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub download_url: String,
}
