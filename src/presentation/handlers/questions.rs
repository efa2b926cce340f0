use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::QuestionGroup;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ExtractQuestionsRequest {
    #[serde(default)]
    pub document_content: String,
}

#[derive(Serialize)]
pub struct ExtractQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionGroup>,
}

#[tracing::instrument(skip(state, request), fields(chars = request.document_content.len()))]
pub async fn extract_questions_handler(
    State(state): State<AppState>,
    Json(request): Json<ExtractQuestionsRequest>,
) -> Result<Json<ExtractQuestionsResponse>, ApiError> {
    let questions_service = &state.llm()?.questions;
    let document_content = request.document_content.trim();

    if document_content.is_empty() {
        return Err(ApiError::BadRequest(
            "Document content cannot be empty".to_string(),
        ));
    }

    let questions = questions_service.extract_questions(document_content).await?;

    Ok(Json(ExtractQuestionsResponse {
        success: true,
        questions,
    }))
}
