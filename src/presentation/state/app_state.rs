use std::sync::Arc;

use crate::application::services::{
    ChatService, ExtractionService, ModificationService, QuestionExtractionService,
};
use crate::domain::TagCatalog;
use crate::presentation::config::Settings;
use crate::presentation::error::ApiError;

/// Services that need a configured completion client.
#[derive(Clone)]
pub struct LlmServices {
    pub chat: Arc<ChatService>,
    pub questions: Arc<QuestionExtractionService>,
    pub modification: Arc<ModificationService>,
}

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    /// `None` when the completion integration failed configuration at startup.
    pub llm: Option<LlmServices>,
    pub tag_catalog: Arc<TagCatalog>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn llm(&self) -> Result<&LlmServices, ApiError> {
        self.llm.as_ref().ok_or(ApiError::LlmUnavailable)
    }

    pub fn llm_available(&self) -> bool {
        self.llm.is_some()
    }
}
