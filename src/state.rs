//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional LLM client and the rate limiter. Clone is required by
//! Axum; both fields are cheap `Arc` clones.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider is configured; chat then answers from the
    /// canned responses.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, rate_limiter: RateLimiter) -> Self {
        Self { llm, rate_limiter }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::llm::types::{ChatResponse, LlmError, Message};
    use crate::rate_limit::RateLimitConfig;

    /// What a [`MockLlm`] answers with.
    #[derive(Clone)]
    pub enum MockOutcome {
        Reply(String),
        Status(u16),
        Transport,
    }

    /// Canned LLM that records every conversation it is sent.
    pub struct MockLlm {
        outcome: MockOutcome,
        pub calls: Mutex<Vec<(String, Vec<Message>)>>,
    }

    impl MockLlm {
        pub fn new(outcome: MockOutcome) -> Arc<Self> {
            Arc::new(Self { outcome, calls: Mutex::new(Vec::new()) })
        }

        pub fn replying(text: &str) -> Arc<Self> {
            Self::new(MockOutcome::Reply(text.to_string()))
        }

        /// Messages of the most recent call.
        pub fn last_messages(&self) -> Vec<Message> {
            self.calls
                .lock()
                .unwrap()
                .last()
                .map(|(_, messages)| messages.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(&self, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), messages.to_vec()));
            match &self.outcome {
                MockOutcome::Reply(text) => Ok(ChatResponse {
                    text: text.clone(),
                    model: "mock".into(),
                    stop_reason: "end_turn".into(),
                    input_tokens: 10,
                    output_tokens: 5,
                }),
                MockOutcome::Status(status) => Err(LlmError::ApiResponse { status: *status, body: "{}".into() }),
                MockOutcome::Transport => Err(LlmError::ApiRequest("connection refused".into())),
            }
        }
    }

    /// A generous limiter that tests will not trip by accident.
    pub fn relaxed_limiter() -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            per_client_limit: 1000,
            per_client_window: std::time::Duration::from_secs(60),
            global_limit: 1000,
            global_window: std::time::Duration::from_secs(60),
            trust_proxy_headers: false,
        })
    }

    /// Create a test `AppState` without an LLM.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, relaxed_limiter())
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm), relaxed_limiter())
    }
}
