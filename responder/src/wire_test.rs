use super::*;

#[test]
fn request_uses_camel_case_history_key() {
    let mut history = ConversationHistory::new();
    history.push_user("hi");
    let request = ChatRequest::new("hi", &history);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["message"], "hi");
    assert_eq!(json["conversationHistory"][0]["role"], "user");
    assert_eq!(json["conversationHistory"][0]["content"], "hi");
    assert!(json.get("conversation_history").is_none());
}

#[test]
fn request_carries_only_last_sixteen_entries() {
    let mut history = ConversationHistory::new();
    for i in 0..20 {
        history.push_user(format!("q{i}"));
        history.push_assistant(format!("a{i}"));
    }
    history.push_user("latest");

    let request = ChatRequest::new("latest", &history);
    assert_eq!(request.conversation_history.len(), 16);
    assert_eq!(request.conversation_history.last(), Some(&Entry::user("latest")));
    assert_eq!(request.conversation_history[0], Entry::assistant("a12"));
}

#[test]
fn request_without_history_deserializes() {
    let request: ChatRequest = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
    assert_eq!(request.message, "hello");
    assert!(request.conversation_history.is_empty());
}

#[test]
fn reply_reads_response_field() {
    let reply: ChatReply = serde_json::from_str(r#"{"response":"hi there","extra":1}"#).unwrap();
    assert_eq!(reply.response, "hi there");
}

#[test]
fn reply_without_response_field_fails() {
    assert!(serde_json::from_str::<ChatReply>(r#"{"error":"nope"}"#).is_err());
}

#[test]
fn error_reply_shape() {
    let json = serde_json::to_string(&ErrorReply { error: "rate limited".to_owned() }).unwrap();
    assert_eq!(json, r#"{"error":"rate limited"}"#);
}
