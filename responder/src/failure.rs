//! Classification of failed chat exchanges into visitor-facing text.
//!
//! Three outcomes only: authentication (401), rate limiting (429), and a
//! generic retry/contact message for everything else. No retry is attempted.

#[cfg(test)]
#[path = "failure_test.rs"]
mod tests;

const PREFIX: &str = "I'm sorry, I'm having trouble connecting right now. ";
const AUTH_TAIL: &str = "There seems to be an API authentication issue.";
const RATE_LIMIT_TAIL: &str = "I'm getting too many requests. Please try again in a moment.";
const GENERIC_TAIL: &str = "Please try again later or contact Miguel directly at mgonzalez869@gmail.com.";

/// Why a remote exchange did not produce a reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeFailure {
    /// The request never completed (network error, CORS, aborted fetch).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("API Error: {0}")]
    Status(u16),

    /// The endpoint answered 2xx but the body was not a chat reply.
    #[error("chat response could not be decoded: {0}")]
    Decode(String),
}

impl ExchangeFailure {
    /// Text shown in the widget for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        let tail = match self {
            Self::Status(401) => AUTH_TAIL,
            Self::Status(429) => RATE_LIMIT_TAIL,
            _ => GENERIC_TAIL,
        };
        format!("{PREFIX}{tail}")
    }
}
