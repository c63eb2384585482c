use super::*;

#[test]
fn desktop_schedule() {
    let s = AutoOpenSchedule::for_viewport(1280.0);
    assert_eq!(s.start_after, Duration::from_millis(100));
    assert_eq!(s.pulse_after, Duration::from_secs(1));
    assert_eq!(s.open_after, Duration::from_secs(3));
    assert_eq!(s.close_after, Duration::from_secs(10));
}

#[test]
fn mobile_schedule() {
    let s = AutoOpenSchedule::for_viewport(375.0);
    assert_eq!(s.open_after, Duration::from_secs(2));
    assert_eq!(s.close_after, Duration::from_secs(4));
}

#[test]
fn mobile_boundary_is_inclusive() {
    assert_eq!(AutoOpenSchedule::for_viewport(480.0), AutoOpenSchedule::for_viewport(320.0));
    assert_ne!(AutoOpenSchedule::for_viewport(481.0), AutoOpenSchedule::for_viewport(480.0));
}

#[test]
fn pulse_comes_before_open() {
    for width in [320.0, 1920.0] {
        let s = AutoOpenSchedule::for_viewport(width);
        assert!(s.pulse_after < s.open_after);
    }
}

#[test]
fn short_content_keeps_min_height() {
    assert_eq!(textarea_size(20), TextareaSize { height_px: TEXTAREA_MIN_HEIGHT, scrollable: false });
}

#[test]
fn content_grows_textarea_up_to_max() {
    assert_eq!(textarea_size(90), TextareaSize { height_px: 90, scrollable: false });
    assert_eq!(textarea_size(120), TextareaSize { height_px: 120, scrollable: false });
}

#[test]
fn overflowing_content_scrolls() {
    assert_eq!(textarea_size(300), TextareaSize { height_px: TEXTAREA_MAX_HEIGHT, scrollable: true });
}

#[test]
fn css_px_formats_style_lengths() {
    assert_eq!(css_px(TEXTAREA_MIN_HEIGHT), "48px");
    assert_eq!(css_px(textarea_size(300).height_px), "120px");
}
