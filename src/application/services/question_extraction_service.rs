use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::{Message, QuestionGroup};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompts::question_extraction_prompt;
use super::response_normalizer::normalize_question_groups;
use super::service_error::ServiceError;

pub struct QuestionExtractionService {
    llm_client: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl QuestionExtractionService {
    pub fn new(llm_client: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        Self {
            llm_client,
            max_tokens,
        }
    }

    /// Asks the model for questions in `document_text` and groups them by precursor.
    #[tracing::instrument(skip(self, document_text), fields(chars = document_text.len()))]
    pub async fn extract_questions(
        &self,
        document_text: &str,
    ) -> Result<Vec<QuestionGroup>, ServiceError> {
        if document_text.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Document content cannot be empty".to_string(),
            ));
        }

        let prompt = question_extraction_prompt(document_text);
        let raw = self
            .llm_client
            .complete(&[Message::user(prompt)], self.max_tokens)
            .await?;

        let groups = normalize_question_groups(&raw).map_err(|e| {
            tracing::warn!(
                error = %e,
                response = %sanitize_prompt(&raw),
                "Model returned an unparseable question list"
            );
            e
        })?;

        tracing::info!(
            group_count = groups.len(),
            question_count = groups.iter().map(|g| g.questions.len()).sum::<usize>(),
            "Questions extracted"
        );

        Ok(groups)
    }
}
