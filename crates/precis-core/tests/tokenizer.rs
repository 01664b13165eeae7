use precis_core::{HeuristicTokenizer, Tokenizer};

#[test]
fn empty_text_counts_zero() {
    let count = HeuristicTokenizer.count_tokens("", true, true).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn short_text_counts_at_least_one() {
    let count = HeuristicTokenizer.count_tokens("hi", true, true).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn longer_text_scales_with_length() {
    let count = HeuristicTokenizer
        .count_tokens("twelve chars", true, true)
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn flags_do_not_change_heuristic_count() {
    let a = HeuristicTokenizer
        .count_tokens("same text", true, true)
        .unwrap();
    let b = HeuristicTokenizer
        .count_tokens("same text", false, false)
        .unwrap();
    assert_eq!(a, b);
}
