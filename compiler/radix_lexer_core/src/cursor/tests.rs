use super::*;

// === Loading ===

#[test]
fn empty_input() {
    let cursor = InputCursor::new("");
    assert!(cursor.is_empty());
    assert!(cursor.is_eof());
    assert_eq!(cursor.len(), 0);
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.remaining().is_empty());
}

#[test]
fn default_matches_empty_input() {
    let cursor = InputCursor::default();
    assert!(cursor.is_empty());
    assert_eq!(cursor.as_bytes(), InputCursor::new("").as_bytes());
}

#[test]
fn keeps_short_input_verbatim() {
    let cursor = InputCursor::new("0hABC");
    assert_eq!(cursor.len(), 5);
    assert_eq!(cursor.as_bytes(), b"0hABC");
}

#[test]
fn truncates_to_max_len() {
    let long = "1".repeat(150);
    let cursor = InputCursor::new(&long);
    assert_eq!(cursor.len(), MAX_INPUT_LEN);
    assert_eq!(cursor.as_bytes(), &long.as_bytes()[..MAX_INPUT_LEN]);
}

#[test]
fn exactly_max_len_is_not_truncated() {
    let text = "7".repeat(MAX_INPUT_LEN);
    let cursor = InputCursor::new(&text);
    assert_eq!(cursor.len(), MAX_INPUT_LEN);
}

#[test]
fn set_input_replaces_prior_session() {
    let mut cursor = InputCursor::new("0b101010");
    cursor.next_byte();
    cursor.next_byte();
    cursor.set_input("42");
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.as_bytes(), b"42");
    // No stale bytes from the longer previous input.
    assert_eq!(cursor.slice(Span::new(0, 8)), b"42");
}

// === Reading ===

#[test]
fn next_byte_walks_input() {
    let mut cursor = InputCursor::new("ab");
    assert_eq!(cursor.next_byte(), Some(b'a'));
    assert_eq!(cursor.next_byte(), Some(b'b'));
    assert_eq!(cursor.next_byte(), None);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn next_byte_at_eof_does_not_advance() {
    let mut cursor = InputCursor::new("a");
    cursor.next_byte();
    assert_eq!(cursor.next_byte(), None);
    assert_eq!(cursor.next_byte(), None);
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn interior_null_is_input() {
    let mut cursor = InputCursor::new("1\u{0}2");
    assert_eq!(cursor.len(), 3);
    cursor.next_byte();
    assert_eq!(cursor.next_byte(), Some(0));
    assert_eq!(cursor.next_byte(), Some(b'2'));
}

#[test]
fn current_does_not_advance() {
    let cursor = InputCursor::new("z");
    assert_eq!(cursor.current(), Some(b'z'));
    assert_eq!(cursor.pos(), 0);
}

// === Putback ===

#[test]
fn putback_rereads_same_byte() {
    let mut cursor = InputCursor::new("xy");
    let before = cursor.pos();
    let first = cursor.next_byte();
    cursor.putback();
    assert_eq!(cursor.pos(), before);
    assert_eq!(cursor.next_byte(), first);
}

#[test]
fn putback_at_start_is_noop() {
    let mut cursor = InputCursor::new("xy");
    cursor.putback();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.next_byte(), Some(b'x'));
}

#[test]
fn putback_after_eof_steps_to_last_byte() {
    let mut cursor = InputCursor::new("12");
    while cursor.next_byte().is_some() {}
    cursor.putback();
    assert_eq!(cursor.remaining(), b"2");
}

// === Blanks ===

#[test]
fn eat_blanks_skips_ascii_whitespace() {
    let mut cursor = InputCursor::new(" \t\r\n 7");
    assert_eq!(cursor.eat_blanks(), 5);
    assert_eq!(cursor.current(), Some(b'7'));
}

#[test]
fn eat_blanks_stops_at_eof() {
    let mut cursor = InputCursor::new("   ");
    assert_eq!(cursor.eat_blanks(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_blanks_without_blanks() {
    let mut cursor = InputCursor::new("0b1");
    assert_eq!(cursor.eat_blanks(), 0);
    assert_eq!(cursor.pos(), 0);
}

// === Slicing ===

#[test]
fn slice_clamps_to_input() {
    let cursor = InputCursor::new("0o17");
    assert_eq!(cursor.slice(Span::new(0, 2)), b"0o");
    assert_eq!(cursor.slice(Span::new(2, 50)), b"17");
    assert_eq!(cursor.slice(Span::new(60, 70)), b"");
}
