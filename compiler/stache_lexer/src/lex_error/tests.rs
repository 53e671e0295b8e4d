use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_captures_cursor_position() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.pop_n(4);
    let err = LexError::at(&cursor, LexErrorReason::MissingClosingDelimiter);
    assert_eq!(err, LexError::new(2, 2, LexErrorReason::MissingClosingDelimiter));
}

#[test]
fn display_includes_position_and_reason() {
    let err = LexError::new(3, 7, LexErrorReason::MissingClosingDelimiter);
    assert_eq!(err.to_string(), "3:7: missing closing delimiter");
}

#[test]
fn reason_display() {
    assert_eq!(
        LexErrorReason::MissingClosingDelimiter.to_string(),
        "missing closing delimiter"
    );
}

#[test]
fn help_mentions_delimiter_directive() {
    assert!(LexErrorReason::MissingClosingDelimiter
        .help()
        .contains("{{=<open> <close>=}}"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&LexError::new(1, 1, LexErrorReason::MissingClosingDelimiter));
}
