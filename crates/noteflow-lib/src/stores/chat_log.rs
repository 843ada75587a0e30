// Chat Log
// Ordered collection of conversational turns, oldest first. Independent of
// the result log.

use crate::models::chat::ChatMessage;

/// Oldest-first log of chat messages.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the tail of the log.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Empty the log. Idempotent; returns the number of messages removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.messages.len();
        self.messages.clear();
        removed
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
