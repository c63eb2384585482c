//! Leptos components for the portfolio chat widget.

pub mod chatbot;
