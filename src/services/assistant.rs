//! Portfolio assistant: turns a visitor message plus history into a reply.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called by `POST /api/chat`. With an LLM configured the reply comes from
//! the provider, grounded by a system prompt built from the canned-response
//! knowledge base. Without one, the keyword selector answers directly so the
//! endpoint keeps working on a bare deployment.

use std::sync::{Arc, OnceLock};

use responder::{Entry, HISTORY_WINDOW, Role};

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

const PROMPT_PREAMBLE: &str = "You are the assistant on Miguel Gonzalez's portfolio website. \
Answer visitors' questions about Miguel's background, projects, skills and availability using only \
the profile below. Keep answers short and friendly and use Markdown for emphasis and lists. If the \
profile does not cover a question, say so and suggest contacting Miguel at mgonzalez869@gmail.com.";

/// System prompt: preamble followed by every canned text.
#[must_use]
pub fn system_prompt() -> &'static str {
    static VALUE: OnceLock<String> = OnceLock::new();
    VALUE.get_or_init(|| format!("{PROMPT_PREAMBLE}\n\n# Profile\n\n{}", responder::knowledge_base()))
}

/// Build the provider conversation for `message`.
///
/// Keeps the last [`HISTORY_WINDOW`] entries of `history`, skips blank turns,
/// drops leading assistant turns (providers expect the user to speak first),
/// and appends `message` as a user turn unless the history already ends with
/// it.
#[must_use]
pub fn build_messages(message: &str, history: &[Entry]) -> Vec<Message> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut messages: Vec<Message> = history[start..]
        .iter()
        .filter(|entry| !entry.content.trim().is_empty())
        .skip_while(|entry| entry.role == Role::Assistant)
        .map(|entry| match entry.role {
            Role::User => Message::user(entry.content.clone()),
            Role::Assistant => Message::assistant(entry.content.clone()),
        })
        .collect();

    let already_sent = messages
        .last()
        .is_some_and(|last| last.role == Role::User.as_str() && last.content.trim() == message);
    if !already_sent {
        messages.push(Message::user(message));
    }
    messages
}

/// Produce the reply text for `message`.
///
/// # Errors
///
/// Returns the provider's [`LlmError`], or [`LlmError::EmptyReply`] if the
/// provider answered with no text. Never fails without an LLM.
pub async fn respond(llm: Option<&Arc<dyn LlmChat>>, message: &str, history: &[Entry]) -> Result<String, LlmError> {
    let Some(llm) = llm else {
        let topic = responder::classify(message);
        tracing::debug!(?topic, "answering from canned responses");
        return Ok(responder::select_response(message).to_owned());
    };

    let messages = build_messages(message, history);
    let response = llm.chat(system_prompt(), &messages).await?;
    tracing::info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        turns = messages.len(),
        "assistant reply"
    );

    if response.text.trim().is_empty() {
        return Err(LlmError::EmptyReply);
    }
    Ok(response.text)
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
