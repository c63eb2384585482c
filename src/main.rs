mod config;
mod llm;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::ServerConfig;
use llm::LlmChat;
use rate_limit::{RateLimitConfig, RateLimiter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid server configuration");
        std::io::Error::other(e)
    })?;

    // Non-fatal: chat falls back to canned responses if the LLM is missing.
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; chat will use canned responses");
            None
        }
    };

    let rate_limits = RateLimitConfig::from_env();
    tracing::info!(
        per_client = rate_limits.per_client_limit,
        global = rate_limits.global_limit,
        trust_proxy_headers = rate_limits.trust_proxy_headers,
        "rate limits configured"
    );
    let state = state::AppState::new(llm, RateLimiter::new(rate_limits));

    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        port = config.port,
        website_dir = %config.website_dir.display(),
        pkg_dir = %config.pkg_dir.display(),
        "portfolio listening"
    );
    axum::serve(listener, app.into_make_service_with_connect_info::<std::net::SocketAddr>()).await
}
