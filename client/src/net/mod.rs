//! Network helpers for the chat endpoint.

pub mod chat_api;
