//! Provider-neutral message types and errors shared by the Anthropic and
//! `OpenAI` clients.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider answered but produced no text.
    #[error("API response contained no text")]
    EmptyReply,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Upstream HTTP status, when the provider answered with one.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ApiResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// MESSAGE TYPES
// =============================================================================

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// A single text turn in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ROLE_USER.to_string(), content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ROLE_ASSISTANT.to_string(), content: content.into() }
    }
}

/// Response from an LLM chat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    /// All text segments of the reply, concatenated.
    pub text: String,
    pub model: String,
    pub stop_reason: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for LLM chat. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send `messages` under the `system` prompt and return the reply.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider rejects it,
    /// or the response is malformed.
    async fn chat(&self, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
