mod document_extractor;
mod llm_client;
mod output_store;

pub use document_extractor::{DocumentExtractor, ExtractorError};
pub use llm_client::{LlmClient, LlmClientError};
pub use output_store::{OutputStore, OutputStoreError};
