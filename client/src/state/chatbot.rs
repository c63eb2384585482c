//! Chat widget state controller.
//!
//! DESIGN
//! ======
//! All widget state (open/closed, loading flag, displayed messages and the
//! conversation history) lives in one `ChatbotState` held in a single
//! `RwSignal`. Components never mutate fields directly; they call the
//! transition methods below. `loading` doubles as the mutual-exclusion flag
//! that keeps a second send from starting while a reply is outstanding.

#[cfg(test)]
#[path = "chatbot_test.rs"]
mod chatbot_test;

use responder::{ChatRequest, ConversationHistory, DeploymentMode, ExchangeFailure};

/// How a displayed message is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Bot,
    User,
    Error,
}

/// A message rendered in the widget. Errors and the welcome text are shown
/// here but never enter the conversation history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
}

impl ChatMessage {
    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), kind, content: content.into() }
    }
}

/// Work produced by a send: either a request for the backend, or a reply
/// already chosen locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Remote(ChatRequest),
    Local(String),
}

#[derive(Clone, Debug)]
pub struct ChatbotState {
    mode: DeploymentMode,
    open: bool,
    loading: bool,
    pulsing: bool,
    messages: Vec<ChatMessage>,
    history: ConversationHistory,
}

impl ChatbotState {
    /// Create a closed widget showing the welcome message for `mode`.
    #[must_use]
    pub fn new(mode: DeploymentMode) -> Self {
        Self {
            mode,
            open: false,
            loading: false,
            pulsing: false,
            messages: vec![ChatMessage::new(MessageKind::Bot, mode.welcome_message())],
            history: ConversationHistory::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.pulsing = false;
        }
    }

    pub fn open(&mut self) {
        if !self.open {
            self.toggle();
        }
    }

    pub fn close(&mut self) {
        if self.open {
            self.toggle();
        }
    }

    /// Start an exchange for the visitor's raw input.
    ///
    /// Returns `None` when the trimmed input is empty or a reply is still
    /// outstanding. Otherwise the message is displayed, appended to history,
    /// and `loading` is set until [`receive`](Self::receive) or
    /// [`fail`](Self::fail) is called.
    pub fn begin_send(&mut self, raw: &str) -> Option<Turn> {
        let message = raw.trim();
        if message.is_empty() || self.loading {
            return None;
        }

        self.messages.push(ChatMessage::new(MessageKind::User, message));
        self.history.push_user(message);
        self.loading = true;

        let turn = match self.mode {
            DeploymentMode::Static => Turn::Local(responder::select_response(message).to_owned()),
            DeploymentMode::Remote => Turn::Remote(ChatRequest::new(message, &self.history)),
        };
        Some(turn)
    }

    /// Record the assistant's reply and release the send lock.
    pub fn receive(&mut self, reply: impl Into<String>) {
        let reply = reply.into();
        self.history.push_assistant(reply.clone());
        self.messages.push(ChatMessage::new(MessageKind::Bot, reply));
        self.loading = false;
    }

    /// Show the failure text and release the send lock. History is left
    /// without an assistant entry for the failed turn.
    pub fn fail(&mut self, failure: &ExchangeFailure) {
        self.messages.push(ChatMessage::new(MessageKind::Error, failure.user_message()));
        self.loading = false;
    }

    pub fn start_pulse(&mut self) {
        self.pulsing = true;
    }

    /// Open the widget on the attention timer. Returns `false` (and changes
    /// nothing) if the visitor already opened it.
    pub fn auto_open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.pulsing = false;
        self.toggle();
        true
    }

    /// Close the widget on the attention timer if it is still open.
    pub fn auto_close(&mut self) {
        self.close();
    }
}

impl Default for ChatbotState {
    fn default() -> Self {
        Self::new(DeploymentMode::default())
    }
}
