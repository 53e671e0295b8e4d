use super::*;
use crate::{lex, lex_with, LexOptions};
use pretty_assertions::assert_eq;

fn text(s: &str) -> Token {
    Token::Text(s.to_owned())
}

fn var(s: &str) -> Token {
    Token::Variable(s.to_owned())
}

fn raw(s: &str) -> Token {
    Token::UnescapedVariable(s.to_owned())
}

fn partial(name: &str, indentation: &str) -> Token {
    Token::Partial {
        name: name.to_owned(),
        indentation: indentation.to_owned(),
    }
}

fn missing_close(line: u32, column: u32) -> LexError {
    LexError::new(line, column, LexErrorReason::MissingClosingDelimiter)
}

// === Literal runs ===

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(lex(""), Ok(vec![]));
}

#[test]
fn plain_text_is_one_token() {
    assert_eq!(
        lex("no tags here\nat all }} {"),
        Ok(vec![text("no tags here\nat all }} {")])
    );
}

#[test]
fn text_around_tag() {
    assert_eq!(
        lex("Hello, {{name}}!\n"),
        Ok(vec![text("Hello, "), var("name"), text("!\n")])
    );
}

// === Sigil dispatch ===

#[test]
fn variable_keeps_sigil_character() {
    assert_eq!(lex("{{name}}"), Ok(vec![var("name")]));
    assert_eq!(lex("{{ person.name }}"), Ok(vec![var("person.name")]));
    assert_eq!(lex("{{.}}"), Ok(vec![var(".")]));
}

#[test]
fn whitespace_and_newlines_after_open_are_skipped() {
    assert_eq!(lex("{{ \n # items }}"), Ok(vec![Token::OpenSection("items".into())]));
}

#[test]
fn unescaped_variable_forms() {
    assert_eq!(lex("{{{foo}}}"), Ok(vec![raw("foo")]));
    assert_eq!(lex("{{&foo}}"), Ok(vec![raw("foo")]));
    assert_eq!(lex("{{{ foo }}}"), Ok(vec![raw("foo")]));
    assert_eq!(lex("{{& foo }}"), Ok(vec![raw("foo")]));
}

#[test]
fn section_markers() {
    assert_eq!(
        lex("{{#a}}{{^b}}{{$c}}{{<d}}{{/e}}"),
        Ok(vec![
            Token::OpenSection("a".into()),
            Token::OpenInvertedSection("b".into()),
            Token::OpenOverrideSection("c".into()),
            Token::OpenParentSection("d".into()),
            Token::CloseSection("e".into()),
        ])
    );
}

#[test]
fn comment_discards_content() {
    assert_eq!(
        lex("a{{! anything {{ goes here }}b"),
        Ok(vec![text("a"), Token::Comment, text("b")])
    );
}

#[test]
fn multiline_comment() {
    assert_eq!(
        lex("a{{!\nline one\nline two\n}}b"),
        Ok(vec![text("a"), Token::Comment, text("b")])
    );
}

#[test]
fn partial_inline_has_no_indentation() {
    assert_eq!(
        lex("before {{> header }} after"),
        Ok(vec![text("before "), partial("header", ""), text(" after")])
    );
}

// === Delimiter changes ===

#[test]
fn delimiter_change_applies_to_later_tags() {
    let tokens = lex("{{=<% %>=}}<%foo%>");
    assert_eq!(
        tokens,
        Ok(vec![
            Token::SetDelimiters(Delimiters::new("<%", "%>").unwrap()),
            var("foo"),
        ])
    );
}

#[test]
fn old_delimiters_are_text_after_change() {
    assert_eq!(
        lex("{{=| |=}}{{name}} |name|"),
        Ok(vec![
            Token::SetDelimiters(Delimiters::new("|", "|").unwrap()),
            text("{{name}} "),
            var("name"),
        ])
    );
}

#[test]
fn delimiters_can_change_back() {
    assert_eq!(
        lex("{{=<% %>=}}<%a%><%={{ }}=%>{{b}}"),
        Ok(vec![
            Token::SetDelimiters(Delimiters::new("<%", "%>").unwrap()),
            var("a"),
            Token::SetDelimiters(Delimiters::default()),
            var("b"),
        ])
    );
}

#[test]
fn scanner_reports_delimiters_in_effect() {
    let scanner = Scanner::with_delimiters(
        Cursor::new("<%x%>"),
        Delimiters::new("<%", "%>").unwrap(),
    );
    assert_eq!(scanner.delimiters().open(), "<%");
    assert_eq!(scanner.scan(), Ok(vec![var("x")]));
}

#[test]
fn custom_starting_delimiters() {
    let options = LexOptions::default().with_delimiters(Delimiters::new("[[", "]]").unwrap());
    assert_eq!(
        lex_with("{{a}} [[#b]]", &options),
        Ok(vec![text("{{a}} "), Token::OpenSection("b".into())])
    );
}

// === Standalone lines ===

#[test]
fn standalone_comment_leaves_no_blank_line() {
    assert_eq!(
        lex("Begin.\n{{! comment }}\nEnd.\n"),
        Ok(vec![text("Begin.\n"), Token::Comment, text("End.\n")])
    );
}

#[test]
fn indented_standalone_section_strips_indent_and_newline() {
    assert_eq!(
        lex("  {{#a}}\nline\n"),
        Ok(vec![Token::OpenSection("a".into()), text("line\n")])
    );
}

#[test]
fn standalone_section_block() {
    assert_eq!(
        lex("|\n  {{#boolean}}\n  body\n  {{/boolean}}\n|"),
        Ok(vec![
            text("|\n"),
            Token::OpenSection("boolean".into()),
            text("  body\n"),
            Token::CloseSection("boolean".into()),
            text("|"),
        ])
    );
}

#[test]
fn standalone_at_end_of_input_without_newline() {
    assert_eq!(
        lex("x\n  {{/a}}"),
        Ok(vec![text("x\n"), Token::CloseSection("a".into())])
    );
}

#[test]
fn standalone_with_crlf() {
    assert_eq!(
        lex("x\r\n{{#a}}\r\ny"),
        Ok(vec![text("x\r\n"), Token::OpenSection("a".into()), text("y")])
    );
}

#[test]
fn trailing_whitespace_before_newline_is_stripped() {
    assert_eq!(
        lex("{{#a}}  \t\nbody"),
        Ok(vec![Token::OpenSection("a".into()), text("body")])
    );
}

#[test]
fn content_before_tag_prevents_stripping() {
    assert_eq!(
        lex("x {{#a}}\ny"),
        Ok(vec![text("x "), Token::OpenSection("a".into()), text("\ny")])
    );
}

#[test]
fn content_after_tag_prevents_stripping() {
    assert_eq!(
        lex("  {{#a}} x\n"),
        Ok(vec![text("  "), Token::OpenSection("a".into()), text(" x\n")])
    );
}

#[test]
fn variables_are_never_standalone() {
    assert_eq!(
        lex("  {{name}}\n"),
        Ok(vec![text("  "), var("name"), text("\n")])
    );
    assert_eq!(
        lex("  {{{name}}}\n"),
        Ok(vec![text("  "), raw("name"), text("\n")])
    );
    assert_eq!(
        lex("  {{&name}}\n"),
        Ok(vec![text("  "), raw("name"), text("\n")])
    );
}

#[test]
fn only_the_previous_text_is_trimmed() {
    assert_eq!(
        lex("a  \n{{x}} \n  {{!c}}\n"),
        Ok(vec![text("a  \n"), var("x"), text(" \n"), Token::Comment])
    );
}

#[test]
fn consecutive_standalone_tags() {
    assert_eq!(
        lex("{{#a}}\n{{#b}}\n{{/b}}\n{{/a}}\n"),
        Ok(vec![
            Token::OpenSection("a".into()),
            Token::OpenSection("b".into()),
            Token::CloseSection("b".into()),
            Token::CloseSection("a".into()),
        ])
    );
}

#[test]
fn standalone_partial_keeps_indentation() {
    assert_eq!(
        lex("begin\n  {{> item }}\nend"),
        Ok(vec![text("begin\n"), partial("item", "  "), text("end")])
    );
}

#[test]
fn partial_indentation_without_standalone() {
    assert_eq!(
        lex("\t{{>p}} tail"),
        Ok(vec![text("\t"), partial("p", "\t"), text(" tail")])
    );
}

#[test]
fn standalone_partial_after_variable_line() {
    assert_eq!(
        lex("{{a}}\n  {{>p}}\n"),
        Ok(vec![var("a"), text("\n"), partial("p", "  ")])
    );
}

#[test]
fn partial_indentation_after_stripped_line_break() {
    assert_eq!(
        lex("{{#a}}\n  {{>p}} x"),
        Ok(vec![
            Token::OpenSection("a".into()),
            text("  "),
            partial("p", "  "),
            text(" x"),
        ])
    );
}

#[test]
fn standalone_delimiter_change() {
    assert_eq!(
        lex("a\n  {{=<% %>=}}\n<%b%>"),
        Ok(vec![
            text("a\n"),
            Token::SetDelimiters(Delimiters::new("<%", "%>").unwrap()),
            var("b"),
        ])
    );
}

#[test]
fn blank_line_after_standalone_is_kept() {
    assert_eq!(
        lex("{{!c}}\n\nx"),
        Ok(vec![Token::Comment, text("\nx")])
    );
}

// === Errors ===

#[test]
fn unterminated_tag_fails_at_end_of_input() {
    assert_eq!(lex("{{#a"), Err(missing_close(1, 5)));
}

#[test]
fn unterminated_tag_on_later_line() {
    assert_eq!(lex("line one\n{{name\nmore"), Err(missing_close(3, 5)));
}

#[test]
fn open_delimiter_alone_fails() {
    assert_eq!(lex("text {{"), Err(missing_close(1, 8)));
    assert_eq!(lex("{{   "), Err(missing_close(1, 6)));
}

#[test]
fn triple_mustache_without_third_brace_fails() {
    assert_eq!(lex("{{{foo}} bar"), Err(missing_close(1, 9)));
}

#[test]
fn malformed_delimiter_directive_fails_after_tag() {
    assert_eq!(lex("{{=<%%>=}} rest"), Err(missing_close(1, 11)));
    assert_eq!(lex("{{=<% %>}}"), Err(missing_close(1, 11)));
}

#[test]
fn error_in_second_tag_discards_earlier_tokens() {
    assert_eq!(lex("{{a}}\n{{#b"), Err(missing_close(2, 5)));
}

#[test]
fn unterminated_under_custom_delimiters() {
    assert_eq!(lex("{{=<% %>=}}<%x}}"), Err(missing_close(1, 17)));
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scan {
    use crate::{lex, Token};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn input_without_open_delimiter_is_single_text(source in "[^{]{1,64}") {
            prop_assert_eq!(lex(&source), Ok(vec![Token::Text(source.clone())]));
        }

        #[test]
        fn text_tokens_never_adjacent_or_empty(source in "[a-z \n{}#/!]{0,48}") {
            if let Ok(tokens) = lex(&source) {
                for pair in tokens.windows(2) {
                    prop_assert!(!(pair[0].is_text() && pair[1].is_text()));
                }
                for token in &tokens {
                    prop_assert_ne!(token, &Token::Text(String::new()));
                }
            }
        }
    }
}
