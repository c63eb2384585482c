//! Deployment mode detection and the mode-dependent welcome text.
//!
//! The mode is decided once from the page's host name. Static hosts have no
//! `/api/chat` backend, so the widget answers from the rule table instead.

#[cfg(test)]
#[path = "mode_test.rs"]
mod tests;

/// Host name fragments that identify static hosting without a backend.
pub const STATIC_HOST_FRAGMENTS: &[&str] = &["github.io", "githubusercontent.com"];

/// Where replies come from for the lifetime of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Replies come from `POST /api/chat`.
    #[default]
    Remote,
    /// Replies come from the local rule table.
    Static,
}

impl DeploymentMode {
    /// Derive the mode from a host name such as `"mga210.github.io"`.
    #[must_use]
    pub fn from_hostname(hostname: &str) -> Self {
        if STATIC_HOST_FRAGMENTS.iter().any(|fragment| hostname.contains(fragment)) {
            Self::Static
        } else {
            Self::Remote
        }
    }

    #[must_use]
    pub fn is_static(self) -> bool {
        self == Self::Static
    }

    /// First bot message shown when the widget is created.
    #[must_use]
    pub fn welcome_message(self) -> &'static str {
        match self {
            Self::Static => STATIC_WELCOME,
            Self::Remote => REMOTE_WELCOME,
        }
    }
}

const STATIC_WELCOME: &str = "👋 Hi! I'm Miguel's assistant. I can help you learn about:\n\n🤖 AI Systems Development\n🐍 Python Programming & GUIs\n📊 Data Analysis & Automation\n🚀 His projects like System Pilot, Blueprint Buddy, and DMRB\n\nWhat would you like to know?";

const REMOTE_WELCOME: &str = "👋 Hi! I'm Miguel's AI assistant. I can help you learn about:\n\n🤖 AI Systems Development\n🐍 Python Programming & GUIs\n📊 Data Analysis & Automation\n🚀 His projects like System Pilot, Blueprint Buddy, and DMRB\n\nWhat would you like to know?";
