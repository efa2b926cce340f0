use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::{ContentKind, Message, TagCatalog};

use super::prompts::{ModificationRequest, build_modification_request};
use super::service_error::ServiceError;

/// Rewrites questions and precursors according to catalog tags.
pub struct ModificationService {
    llm_client: Arc<dyn LlmClient>,
    catalog: Arc<TagCatalog>,
    max_tokens: u32,
}

impl ModificationService {
    pub fn new(llm_client: Arc<dyn LlmClient>, catalog: Arc<TagCatalog>, max_tokens: u32) -> Self {
        Self {
            llm_client,
            catalog,
            max_tokens,
        }
    }

    #[tracing::instrument(skip(self, original_text), fields(tags = ?tag_ids))]
    pub async fn modify(
        &self,
        original_text: &str,
        tag_ids: &[String],
        kind: ContentKind,
    ) -> Result<String, ServiceError> {
        if let Some((first, second)) = self.catalog.conflicts_in(tag_ids).into_iter().next() {
            return Err(ServiceError::Validation(format!(
                "Tags '{}' and '{}' cannot be applied together",
                first, second
            )));
        }

        match build_modification_request(original_text, tag_ids, &self.catalog, kind) {
            ModificationRequest::Unchanged(text) => Ok(text),
            ModificationRequest::Prompt(prompt) => {
                let modified = self
                    .llm_client
                    .complete(&[Message::user(prompt)], self.max_tokens)
                    .await?;
                Ok(modified)
            }
        }
    }
}
