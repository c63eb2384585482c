use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Hello world" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Hello world");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_joins_text_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Miguel built " },
        { "type": "text", "text": "DMRB." }
    ]));
    assert_eq!(parse_response(&json).unwrap().text, "Miguel built DMRB.");
}

#[test]
fn parse_skips_non_text_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "Here is my answer" },
        { "type": "some_future_type", "data": {} }
    ]));
    assert_eq!(parse_response(&json).unwrap().text, "Here is my answer");
}

#[test]
fn parse_empty_content_gives_empty_text() {
    let json = make_response(serde_json::json!([]));
    assert_eq!(parse_response(&json).unwrap().text, "");
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_serializes_system_separately() {
    let messages = vec![Message::user("hi")];
    let body = ApiRequest { model: "m", max_tokens: 64, system: "be brief", messages: &messages };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["system"], "be brief");
    assert_eq!(json["max_tokens"], 64);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "hi");
}
