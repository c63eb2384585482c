//! Session-scoped conversation history.
//!
//! The history is append-only for the lifetime of the widget. Only the most
//! recent [`HISTORY_WINDOW`] entries are ever sent to the backend, but the
//! full log is kept in memory.

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Number of trailing entries included in an outgoing chat request.
pub const HISTORY_WINDOW: usize = 16;

/// Who authored a conversation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role (`"user"` / `"assistant"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One exchanged message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub role: Role,
    pub content: String,
}

impl Entry {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Ordered log of entries exchanged during this page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    entries: Vec<Entry>,
}

impl ConversationHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.entries.push(Entry::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.entries.push(Entry::assistant(content));
    }

    /// The last `limit` entries, oldest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// The slice sent with a chat request.
    #[must_use]
    pub fn window(&self) -> &[Entry] {
        self.recent(HISTORY_WINDOW)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }
}
