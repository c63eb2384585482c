//! JSON bodies exchanged over `POST /api/chat`.

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::history::{ConversationHistory, Entry};

/// Path of the chat endpoint, relative to the site origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Trailing window of the conversation, already including `message` as
    /// its last user entry when sent by the widget.
    #[serde(rename = "conversationHistory", default)]
    pub conversation_history: Vec<Entry>,
}

impl ChatRequest {
    /// Build a request carrying the history's outgoing window.
    #[must_use]
    pub fn new(message: impl Into<String>, history: &ConversationHistory) -> Self {
        Self { message: message.into(), conversation_history: history.window().to_vec() }
    }
}

/// Success body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}
