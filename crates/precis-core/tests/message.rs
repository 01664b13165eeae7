use precis_core::{Message, MessageRole};

#[test]
fn constructors_set_roles() {
    assert!(Message::system("s").is_system());
    assert!(Message::user("u").is_user());
    assert!(Message::assistant("a").is_assistant());
    assert_eq!(Message::user("u").role(), MessageRole::User);
}

#[test]
fn role_labels_are_lowercase() {
    assert_eq!(MessageRole::System.to_string(), "system");
    assert_eq!(MessageRole::User.to_string(), "user");
    assert_eq!(MessageRole::Assistant.to_string(), "assistant");
}

#[test]
fn content_may_be_empty() {
    let msg = Message::assistant("");
    assert_eq!(msg.content(), "");
}

#[test]
fn message_serde_roundtrip() {
    let msg = Message::user("hello world");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "hello world");
    let deserialized: Message = serde_json::from_value(json).unwrap();
    assert_eq!(msg, deserialized);
}
