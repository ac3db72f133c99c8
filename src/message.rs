//! Chat messages and the shapes they take at the crate boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ContextError, Result};

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// The role that normally answers this one.
    pub fn other(self) -> Self {
        match self {
            MessageRole::User => MessageRole::Assistant,
            MessageRole::Assistant => MessageRole::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(ContextError::InvalidMessage(format!(
                "unknown role '{}', expected 'user' or 'assistant'",
                other
            ))),
        }
    }
}

/// A single stored message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ChatMessage {
    /// Create a new message with a fresh id and the current time
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Replace the generated id with one assigned by the store
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach opaque metadata; the core never inspects it
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Untyped message as a store or API layer may hand it over.
///
/// Convert with `ChatMessage::try_from`, which rejects a missing role, a
/// missing content field or a role outside `user`/`assistant`. A missing id
/// or timestamp is filled in the same way `ChatMessage::new` does.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMessage {
    pub id: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl TryFrom<RawMessage> for ChatMessage {
    type Error = ContextError;

    fn try_from(raw: RawMessage) -> Result<Self> {
        let role = raw
            .role
            .ok_or_else(|| ContextError::InvalidMessage("message has no role".to_string()))?
            .parse::<MessageRole>()?;
        let content = raw
            .content
            .ok_or_else(|| ContextError::InvalidMessage("message has no content".to_string()))?;

        Ok(Self {
            id: raw.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            role,
            content,
            timestamp: raw.timestamp.unwrap_or_else(Utc::now),
            metadata: raw.metadata,
        })
    }
}

/// The `{role, content}` pair an LLM request builder consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}
