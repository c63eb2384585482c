use super::*;

#[test]
fn unauthorized_gets_auth_message() {
    let text = ExchangeFailure::Status(401).user_message();
    assert!(text.starts_with(PREFIX));
    assert!(text.ends_with(AUTH_TAIL));
}

#[test]
fn too_many_requests_gets_rate_limit_message() {
    let text = ExchangeFailure::Status(429).user_message();
    assert!(text.starts_with(PREFIX));
    assert!(text.ends_with(RATE_LIMIT_TAIL));
}

#[test]
fn server_error_gets_generic_message() {
    let text = ExchangeFailure::Status(500).user_message();
    assert_eq!(text, format!("{PREFIX}{GENERIC_TAIL}"));
}

#[test]
fn specialized_messages_are_distinct() {
    let auth = ExchangeFailure::Status(401).user_message();
    let limited = ExchangeFailure::Status(429).user_message();
    let generic = ExchangeFailure::Status(500).user_message();
    assert_ne!(auth, limited);
    assert_ne!(auth, generic);
    assert_ne!(limited, generic);
}

#[test]
fn transport_and_decode_failures_are_generic() {
    let generic = ExchangeFailure::Status(503).user_message();
    assert_eq!(ExchangeFailure::Transport("offline".into()).user_message(), generic);
    assert_eq!(ExchangeFailure::Decode("missing field".into()).user_message(), generic);
}

#[test]
fn transport_text_mentioning_a_status_is_still_generic() {
    // Classification is by status code, not by scanning error text.
    let text = ExchangeFailure::Transport("proxy said 401".into()).user_message();
    assert!(text.ends_with(GENERIC_TAIL));
}

#[test]
fn display_includes_status() {
    assert_eq!(ExchangeFailure::Status(404).to_string(), "API Error: 404");
}
