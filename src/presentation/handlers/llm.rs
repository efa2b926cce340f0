use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::{ContentKind, Message, ModificationTag};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub use_conversation: bool,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub response: String,
    pub conversation_mode: bool,
}

#[derive(Serialize)]
pub struct TestResponse {
    pub success: bool,
    pub message: &'static str,
    pub response: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub turns: Vec<Message>,
}

#[derive(Deserialize)]
pub struct ModifyRequest {
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub selected_tags: Vec<String>,
    #[serde(default)]
    pub is_precursor: bool,
}

#[derive(Serialize)]
pub struct ModifyResponse {
    pub success: bool,
    pub response: String,
}

#[derive(Serialize)]
pub struct TagsResponse {
    pub success: bool,
    pub tags: Vec<ModificationTag>,
}

#[tracing::instrument(skip(state))]
pub async fn test_connection_handler(
    State(state): State<AppState>,
) -> Result<Json<TestResponse>, ApiError> {
    let response = state.llm()?.chat.ping().await?;
    tracing::info!("LLM connectivity test succeeded");

    Ok(Json(TestResponse {
        success: true,
        message: "LLM API test successful",
        response,
    }))
}

#[tracing::instrument(skip(state, request), fields(conversation = request.use_conversation))]
pub async fn message_handler(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let chat = &state.llm()?.chat;
    let message = request.message.trim();

    if message.is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    tracing::debug!(prompt = %sanitize_prompt(message), "Forwarding message");

    let response = if request.use_conversation {
        chat.send(message).await?
    } else {
        chat.send_once(message).await?
    };

    Ok(Json(MessageResponse {
        success: true,
        response,
        conversation_mode: request.use_conversation,
    }))
}

pub async fn reset_handler(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    state.llm()?.chat.reset().await;

    Ok(Json(StatusResponse {
        success: true,
        message: "Conversation history cleared",
    }))
}

pub async fn history_handler(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let turns = state.llm()?.chat.history().await;

    Ok(Json(HistoryResponse {
        success: true,
        turns,
    }))
}

#[tracing::instrument(
    skip(state, request),
    fields(tags = ?request.selected_tags, is_precursor = request.is_precursor)
)]
pub async fn modify_handler(
    State(state): State<AppState>,
    Json(request): Json<ModifyRequest>,
) -> Result<Json<ModifyResponse>, ApiError> {
    if request.original_text.trim().is_empty() {
        return Err(ApiError::BadRequest("Original text cannot be empty".to_string()));
    }

    // An empty selection returns the text as is, without a completion call.
    if request.selected_tags.is_empty() {
        return Ok(Json(ModifyResponse {
            success: true,
            response: request.original_text,
        }));
    }

    let response = state
        .llm()?
        .modification
        .modify(
            &request.original_text,
            &request.selected_tags,
            ContentKind::from_is_precursor(request.is_precursor),
        )
        .await?;

    Ok(Json(ModifyResponse {
        success: true,
        response,
    }))
}

pub async fn tags_handler(State(state): State<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        success: true,
        tags: state.tag_catalog.all().into_iter().cloned().collect(),
    })
}
