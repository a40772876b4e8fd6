//! Session and turn domain types.
//!
//! These are the value objects that flow through a chat turn:
//! the browser posts a `ChatRequest`, the orchestrator correlates it
//! with the session's stored `Turn`s, and the provider's reply becomes
//! the next `Turn` in the sequence.

use serde::{Deserialize, Serialize};

/// Opaque identifier scoping a conversation.
///
/// The simplest deployment runs a single implicit session; clients that
/// track their own key send it with each request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionKey {
    /// The implicit global session used when the client sends no key.
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the exchange a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The generated reply
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a conversation, with its position in the sequence.
///
/// Turns are immutable once stored. Within a session, `sequence_no` is
/// strictly increasing and a reply's number is exactly one greater than
/// the user turn that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who sent this turn
    pub role: Role,

    /// The text content
    pub text: String,

    /// Position within the session, assigned by the memory adapter
    pub sequence_no: u64,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>, sequence_no: u64) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sequence_no,
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>, sequence_no: u64) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            sequence_no,
        }
    }
}

/// One inbound chat-turn request from the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,

    /// Client transaction id correlating the response back to the
    /// pending-response indicator the browser is already showing.
    /// Pure echo data — never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            thinking_id: None,
        }
    }

    pub fn with_thinking_id(mut self, id: impl Into<String>) -> Self {
        self.thinking_id = Some(id.into());
        self
    }
}
