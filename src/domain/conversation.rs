use chrono::{DateTime, Utc};

use super::Message;

/// Append-only turn log. The only other mutation is a wholesale reset.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    /// Drops every turn after `len`. Used to undo a turn whose reply never arrived.
    pub fn rollback_to(&mut self, len: usize) {
        self.messages.truncate(len);
        self.updated_at = Utc::now();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
