//! LLM: multi-provider adapter for the portfolio assistant.
//!
//! DESIGN
//! ======
//! The `LlmClient` dispatches to Anthropic or `OpenAI` based on
//! `LLM_PROVIDER`. Handlers only see the `LlmChat` trait so tests can swap
//! in a mock provider.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod types;

use std::time::Duration;

use config::{LlmConfig, LlmProviderKind, LlmTimeouts};
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to either Anthropic or `OpenAI`.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
    max_tokens: u32,
}

enum LlmProvider {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables. See
    /// [`LlmConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let http = http_client(config.timeouts)?;
        let inner = match config.provider {
            LlmProviderKind::Anthropic => LlmProvider::Anthropic(anthropic::AnthropicClient::new(http, config.api_key)),
            LlmProviderKind::OpenAi => {
                LlmProvider::OpenAi(openai::OpenAiClient::new(http, config.api_key, config.openai_base_url))
            }
        };
        Ok(Self { inner, model: config.model, max_tokens: config.max_tokens })
    }

    /// Return the configured model name (e.g. `"claude-sonnet-4-5-20250929"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        match &self.inner {
            LlmProvider::Anthropic(c) => c.chat(&self.model, self.max_tokens, system, messages).await,
            LlmProvider::OpenAi(c) => c.chat(&self.model, self.max_tokens, system, messages).await,
        }
    }
}

fn http_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Read a provider response, turning any non-200 status into
/// [`LlmError::ApiResponse`].
async fn read_body(response: reqwest::Response) -> Result<String, LlmError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    if status != 200 {
        return Err(LlmError::ApiResponse { status, body: text });
    }
    Ok(text)
}
