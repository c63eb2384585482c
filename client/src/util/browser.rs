//! Thin wrappers over `window` used at widget startup.
//!
//! Outside the browser every lookup returns `None`, so callers fall back to
//! remote mode and the desktop schedule.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use responder::DeploymentMode;

/// DOM id of the widget root; its presence means the widget is mounted.
pub const CONTAINER_ID: &str = "chatbot-container";

/// Host name of the current page (`location.hostname`).
pub fn hostname() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().hostname().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Viewport width in CSS pixels (`window.innerWidth`).
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Decide the deployment mode for this page load.
pub fn detect_mode() -> DeploymentMode {
    DeploymentMode::from_hostname(&hostname().unwrap_or_default())
}

/// Whether a widget root already exists in the document.
pub fn chatbot_mounted() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONTAINER_ID))
            .is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
