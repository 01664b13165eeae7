use precis_core::{Message, Transcript};

fn transcript_of(contents: &[&str]) -> Transcript {
    let mut transcript = Transcript::new();
    for content in contents {
        transcript.push(Message::user(*content));
    }
    transcript
}

#[test]
fn push_and_len() {
    let mut transcript = Transcript::new();
    assert!(transcript.is_empty());
    transcript.push(Message::user("hi"));
    transcript.push(Message::assistant("hello"));
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.messages()[0].content(), "hi");
}

#[test]
fn collapse_prefix_replaces_oldest_with_summary() {
    let mut transcript = transcript_of(&["1", "2", "3", "4", "5"]);
    transcript.collapse_prefix(3, Message::assistant("summary"));

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.messages()[0].content(), "summary");
    assert!(transcript.messages()[0].is_assistant());
    // The untouched tail keeps its order
    assert_eq!(transcript.messages()[1].content(), "4");
    assert_eq!(transcript.messages()[2].content(), "5");
}

#[test]
fn collapse_prefix_clamps_to_length() {
    let mut transcript = transcript_of(&["only"]);
    transcript.collapse_prefix(5, Message::assistant("summary"));

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.messages()[0].content(), "summary");
}

#[test]
fn collapse_prefix_of_zero_only_inserts() {
    let mut transcript = transcript_of(&["a", "b"]);
    transcript.collapse_prefix(0, Message::assistant("summary"));

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.messages()[0].content(), "summary");
    assert_eq!(transcript.messages()[1].content(), "a");
}

#[test]
fn from_vec_preserves_order() {
    let transcript = Transcript::from(vec![Message::user("1"), Message::assistant("2")]);
    let contents: Vec<_> = transcript.iter().map(|m| m.content()).collect();
    assert_eq!(contents, ["1", "2"]);
}
