//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio site is served as static files at `/`, the widget's wasm
//! bundle under `/pkg`, and the chat API alongside them under a single Axum
//! router.

pub mod chat;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(responder::wire::CHAT_ENDPOINT, post(chat::chat))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + widget bundle at `/pkg` + portfolio at `/`.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let website_service = ServeDir::new(&config.website_dir).append_index_html_on_directories(true);

    api_routes(state)
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(website_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
