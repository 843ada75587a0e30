// QA chat data models
// Conversational turns between the user and the QA pipeline. The chat log is
// independent of the result log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chat message author
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Assistant,
}

impl std::fmt::Display for ChatSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatSender::User => write!(f, "user"),
            ChatSender::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for ChatSender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(ChatSender::User),
            "assistant" | "system" => Ok(ChatSender::Assistant),
            _ => Err(format!("Invalid chat sender: {}", s)),
        }
    }
}

/// A single conversational turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: ChatSender,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: ChatSender::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: ChatSender::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_sender() {
        let question = ChatMessage::user("What is attention?");
        assert_eq!(question.sender, ChatSender::User);
        assert_eq!(question.content, "What is attention?");

        let answer = ChatMessage::assistant("A weighting mechanism.");
        assert_eq!(answer.sender, ChatSender::Assistant);
        assert_ne!(question.id, answer.id);
    }

    #[test]
    fn test_sender_parse_and_display() {
        assert_eq!("user".parse::<ChatSender>().unwrap(), ChatSender::User);
        assert_eq!("assistant".parse::<ChatSender>().unwrap(), ChatSender::Assistant);
        assert_eq!("system".parse::<ChatSender>().unwrap(), ChatSender::Assistant);
        assert!("tool".parse::<ChatSender>().is_err());
        assert_eq!(ChatSender::User.to_string(), "user");
    }
}
