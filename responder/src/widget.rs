//! Timing and sizing rules for the chat widget chrome.
//!
//! Kept here rather than in the Leptos crate so the numbers can be tested
//! without a browser.

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;

use std::time::Duration;

/// Viewports at or below this width use the mobile schedule.
pub const MOBILE_MAX_WIDTH: f64 = 480.0;

/// Resting height of the message textarea in pixels.
pub const TEXTAREA_MIN_HEIGHT: i32 = 48;
/// Height at which the textarea stops growing and starts scrolling.
pub const TEXTAREA_MAX_HEIGHT: i32 = 120;

/// When the widget draws attention to itself after page load.
///
/// `pulse_after` and `open_after` are measured from `start_after`;
/// `close_after` is measured from the moment the widget auto-opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoOpenSchedule {
    pub start_after: Duration,
    pub pulse_after: Duration,
    pub open_after: Duration,
    pub close_after: Duration,
}

impl AutoOpenSchedule {
    /// Pick the schedule for a viewport `width` in CSS pixels.
    #[must_use]
    pub fn for_viewport(width: f64) -> Self {
        let mobile = width <= MOBILE_MAX_WIDTH;
        Self {
            start_after: Duration::from_millis(100),
            pulse_after: Duration::from_millis(1000),
            open_after: Duration::from_millis(if mobile { 2000 } else { 3000 }),
            close_after: Duration::from_millis(if mobile { 4000 } else { 10_000 }),
        }
    }
}

/// CSS length for `px` pixels, as written to `style.height`.
#[must_use]
pub fn css_px(px: i32) -> String {
    format!("{px}px")
}

/// Resolved textarea height and whether it should show a scrollbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextareaSize {
    pub height_px: i32,
    pub scrollable: bool,
}

/// Size the textarea for content measuring `scroll_height` pixels.
#[must_use]
pub fn textarea_size(scroll_height: i32) -> TextareaSize {
    TextareaSize {
        height_px: scroll_height.clamp(TEXTAREA_MIN_HEIGHT, TEXTAREA_MAX_HEIGHT),
        scrollable: scroll_height > TEXTAREA_MAX_HEIGHT,
    }
}
