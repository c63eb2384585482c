//! Browser chat widget for the portfolio site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built as a wasm bundle with the `csr` feature and loaded by the static
//! portfolio page. On start it mounts the `Chatbot` component at the end of
//! `<body>`. Without `csr` the crate still compiles natively so the state
//! controller and helpers can be tested with plain `cargo test`.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Wasm entry point: install the panic hook and logger, then mount the
/// widget unless a previous bundle load already did.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if util::browser::chatbot_mounted() {
        log::warn!("chatbot already mounted; skipping");
        return;
    }

    leptos::mount::mount_to_body(components::chatbot::Chatbot);
    log::info!("chatbot mounted");
}
