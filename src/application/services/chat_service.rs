use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::LlmClient;
use crate::domain::{Conversation, Message};

use super::prompts::ACK_PROMPT;
use super::service_error::ServiceError;

/// Multi-turn chat over a single in-memory conversation.
///
/// The conversation lock is held for the whole of [`ChatService::send`], so
/// concurrent callers are serialized and turns never interleave.
pub struct ChatService {
    llm_client: Arc<dyn LlmClient>,
    conversation: Mutex<Conversation>,
    single_max_tokens: u32,
    chat_max_tokens: u32,
}

impl ChatService {
    pub fn new(llm_client: Arc<dyn LlmClient>, single_max_tokens: u32, chat_max_tokens: u32) -> Self {
        Self {
            llm_client,
            conversation: Mutex::new(Conversation::new()),
            single_max_tokens,
            chat_max_tokens,
        }
    }

    /// Appends `text` as a user turn, sends the full history and records the reply.
    ///
    /// When the completion call fails the user turn is removed again, leaving
    /// the history exactly as it was before the call.
    #[tracing::instrument(skip(self, text))]
    pub async fn send(&self, text: &str) -> Result<String, ServiceError> {
        ensure_not_blank(text)?;

        let mut conversation = self.conversation.lock().await;
        let checkpoint = conversation.len();
        conversation.push(Message::user(text));

        match self
            .llm_client
            .complete(conversation.messages(), self.chat_max_tokens)
            .await
        {
            Ok(reply) => {
                conversation.push(Message::assistant(reply.clone()));
                tracing::debug!(turns = conversation.len(), "Conversation turn recorded");
                Ok(reply)
            }
            Err(e) => {
                conversation.rollback_to(checkpoint);
                tracing::warn!(error = %e, "Completion failed, user turn rolled back");
                Err(e.into())
            }
        }
    }

    /// One-shot completion that never reads or writes the conversation.
    #[tracing::instrument(skip(self, text))]
    pub async fn send_once(&self, text: &str) -> Result<String, ServiceError> {
        ensure_not_blank(text)?;

        let reply = self
            .llm_client
            .complete(&[Message::user(text)], self.single_max_tokens)
            .await?;
        Ok(reply)
    }

    /// Sends the fixed acknowledgement prompt to verify connectivity.
    pub async fn ping(&self) -> Result<String, ServiceError> {
        self.send_once(ACK_PROMPT).await
    }

    pub async fn reset(&self) {
        let mut conversation = self.conversation.lock().await;
        conversation.reset();
        tracing::info!("Conversation history cleared");
    }

    pub async fn history(&self) -> Vec<Message> {
        self.conversation.lock().await.messages().to_vec()
    }
}

fn ensure_not_blank(text: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::Validation("Message cannot be empty".to_string()));
    }
    Ok(())
}
