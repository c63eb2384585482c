//! Chat assistant core shared by the portfolio server and the browser widget.
//!
//! This crate is UI-framework agnostic: it owns the keyword-routed canned
//! responses, the conversation history model, the `/api/chat` wire types and
//! the mapping from exchange failures to visitor-facing text. The `client`
//! crate drives it from Leptos; the root server uses it as the fallback when
//! no LLM provider is configured.

pub mod failure;
pub mod history;
pub mod mode;
pub mod rules;
pub mod widget;
pub mod wire;

pub use failure::ExchangeFailure;
pub use history::{ConversationHistory, Entry, HISTORY_WINDOW, Role};
pub use mode::DeploymentMode;
pub use rules::{Topic, classify, knowledge_base, select_response};
pub use wire::{ChatReply, ChatRequest};
