use super::*;
use pretty_assertions::assert_eq;
use stache_lexer::{lex, lex_with, Delimiters, LexOptions};

#[test]
fn listing_shows_kind_and_detail() {
    let tokens = lex("Hi {{name}}!\n{{#items}}\n  {{> item }}\n{{/items}}\n").unwrap();
    assert_eq!(
        format_tokens("t.stache", &tokens),
        "Tokens for 't.stache' (6 tokens):\n\
         \x20 text                   \"Hi \"\n\
         \x20 variable               name\n\
         \x20 text                   \"!\\n\"\n\
         \x20 open_section           items\n\
         \x20 partial                item (indent \"  \")\n\
         \x20 close_section          items\n"
    );
}

#[test]
fn listing_of_nameless_tags_has_no_trailing_space() {
    let options = LexOptions::default().with_delimiters(Delimiters::new("<%", "%>").unwrap());
    let tokens = lex_with("<%! note %><%={{ }}=%>", &options).unwrap();
    assert_eq!(
        format_tokens("t.stache", &tokens),
        "Tokens for 't.stache' (2 tokens):\n  comment\n  set_delimiters         {{ }}\n"
    );
}

#[test]
fn empty_listing() {
    assert_eq!(
        format_tokens("empty.stache", &[]),
        "Tokens for 'empty.stache' (0 tokens):\n"
    );
}

#[test]
fn tokens_serialize_to_json() {
    let tokens = lex("a{{b}}").unwrap();
    let json = serde_json::to_string(&tokens).unwrap();
    assert_eq!(json, r#"[{"Text":"a"},{"Variable":"b"}]"#);
}
