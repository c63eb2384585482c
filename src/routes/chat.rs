//! `POST /api/chat`: answer a visitor message.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`ChatApiError`], rendered as `{"error": ...}`
//! with a status the widget knows how to explain: 400 for an empty message,
//! 401 when the provider rejects our credentials, 429 for local or upstream
//! rate limits, 502 for anything else the provider does wrong.
//!
//! CLIENT IDENTITY
//! ===============
//! Rate limits are keyed by the TCP peer address from `ConnectInfo`. Proxy
//! headers are client-controlled, so they replace the peer address only when
//! `RATE_LIMIT_TRUST_PROXY` is set for a deployment behind a proxy that
//! overwrites them.

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{Extensions, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use responder::wire::ErrorReply;
use responder::{ChatReply, ChatRequest};

use crate::llm::types::LlmError;
use crate::rate_limit::RateLimitError;
use crate::services::assistant;
use crate::state::AppState;

/// Rate-limit key shared by requests that carry no client address.
pub const ANONYMOUS_CLIENT: &str = "anonymous";

#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    #[error("Message is required")]
    EmptyMessage,
    #[error("Too many requests. Please try again later.")]
    RateLimited(#[from] RateLimitError),
    #[error("The assistant is not authorized with its language model provider")]
    Unauthorized,
    #[error("The assistant's language model provider is busy. Please try again later.")]
    UpstreamBusy,
    #[error("The assistant could not get a response right now")]
    Upstream(LlmError),
}

impl ChatApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) | Self::UpstreamBusy => StatusCode::TOO_MANY_REQUESTS,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<LlmError> for ChatApiError {
    fn from(err: LlmError) -> Self {
        match err.upstream_status() {
            Some(401 | 403) => Self::Unauthorized,
            Some(429) => Self::UpstreamBusy,
            _ => Self::Upstream(err),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorReply { error: self.to_string() })).into_response()
    }
}

/// Identify the caller for rate limiting.
///
/// With `trust_proxy` the first `x-forwarded-for` hop or `x-real-ip` wins.
/// Otherwise those headers are ignored and the `peer` address is used. Falls
/// back to [`ANONYMOUS_CLIENT`] when nothing identifies the caller.
#[must_use]
pub fn client_key(headers: &HeaderMap, peer: Option<IpAddr>, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next());
        let real_ip = headers.get("x-real-ip").and_then(|v| v.to_str().ok());

        let proxied = [forwarded, real_ip]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|v| !v.is_empty());
        if let Some(addr) = proxied {
            return addr.to_string();
        }
    }

    peer.map_or_else(|| ANONYMOUS_CLIENT.to_string(), |ip| ip.to_string())
}

pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ChatApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ChatApiError::EmptyMessage);
    }

    let peer = extensions.get::<ConnectInfo<SocketAddr>>().map(|ConnectInfo(addr)| addr.ip());
    let client = client_key(&headers, peer, state.rate_limiter.config().trust_proxy_headers);
    if let Err(e) = state.rate_limiter.check_and_record(&client) {
        tracing::warn!(%client, error = %e, "chat request rate limited");
        return Err(e.into());
    }

    match assistant::respond(state.llm.as_ref(), message, &request.conversation_history).await {
        Ok(response) => Ok(Json(ChatReply { response })),
        Err(e) => {
            tracing::error!(%client, error = %e, "chat request failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
