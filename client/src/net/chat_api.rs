//! Chat endpoint client.
//!
//! Browser (csr): real HTTP call via `gloo-net`.
//! Native builds: the remote path reports a transport failure, since the
//! endpoint is only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ExchangeFailure`] so the widget can show
//! the matching visitor-facing text instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_api_test.rs"]
mod chat_api_test;

use responder::{ChatRequest, ExchangeFailure};

use crate::state::chatbot::Turn;

/// Map a response status to success or a status failure.
#[cfg(any(test, feature = "csr"))]
fn check_status(ok: bool, status: u16) -> Result<(), ExchangeFailure> {
    if ok { Ok(()) } else { Err(ExchangeFailure::Status(status)) }
}

/// Resolve a turn to reply text: local turns already carry it, remote turns
/// go through `POST /api/chat`.
///
/// # Errors
///
/// Returns the [`ExchangeFailure`] of the remote call.
pub async fn exchange(turn: Turn) -> Result<String, ExchangeFailure> {
    match turn {
        Turn::Local(reply) => Ok(reply),
        Turn::Remote(request) => send_chat(&request).await,
    }
}

/// Send `request` to the chat endpoint and return the `response` text.
///
/// # Errors
///
/// Returns [`ExchangeFailure::Transport`] if the request could not be made,
/// [`ExchangeFailure::Status`] for a non-2xx answer, and
/// [`ExchangeFailure::Decode`] if the body lacks a `response` field.
pub async fn send_chat(request: &ChatRequest) -> Result<String, ExchangeFailure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(responder::wire::CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| ExchangeFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ExchangeFailure::Transport(e.to_string()))?;
        check_status(resp.ok(), resp.status())?;
        let body: responder::ChatReply = resp
            .json()
            .await
            .map_err(|e| ExchangeFailure::Decode(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ExchangeFailure::Transport("not available outside the browser".to_owned()))
    }
}
