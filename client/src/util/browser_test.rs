#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn lookups_are_empty_outside_browser() {
    assert!(hostname().is_none());
    assert!(viewport_width().is_none());
    assert!(!chatbot_mounted());
}

#[test]
fn detect_mode_defaults_to_remote() {
    assert_eq!(detect_mode(), DeploymentMode::Remote);
}
