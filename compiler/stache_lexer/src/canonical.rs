//! Canonical template text for a token list.
//!
//! [`to_template`] writes every tag in its minimal form (`{{name}}`,
//! `{{#name}}`, `{{!}}`, ...) under the delimiters in effect at that point.
//! Lexing the output again yields the same tokens for any list the lexer
//! itself produced; only whitespace inside tags and comment bodies is lost.
//!
//! # Line breaks
//!
//! Standalone stripping removes the line break after a tag that sits alone
//! on its line, so the token list no longer records whether such a tag
//! ended its line. The renderer decides per tag: a standalone-capable tag
//! written at the start of a line gets its own line unless the next tag on
//! that line must not start a line (see [`LineStart`]). Line starts matter
//! because they decide a later tag's standalone status and a partial's
//! indentation.

use crate::{LexOptions, Token};

/// Render `tokens`, lexed with the default `{{` / `}}` delimiters, back into
/// template text.
pub fn to_template(tokens: &[Token]) -> String {
    to_template_with(tokens, &LexOptions::default())
}

/// Render `tokens` that were lexed with `options`.
///
/// The output starts under `options.delimiters`, so it must be lexed with
/// the same options to reproduce `tokens`.
pub fn to_template_with(tokens: &[Token], options: &LexOptions) -> String {
    let plan = line_start_plan(tokens);
    let mut out = String::new();
    let mut delimiters = options.delimiters.clone();

    for (i, token) in tokens.iter().enumerate() {
        let own_line = token.is_standalone_capable()
            && owns_line(token, line_indentation(&out), &tokens[i + 1..], plan[i + 1]);
        let (open, close) = (delimiters.open(), delimiters.close());

        match token {
            Token::Text(text) => out.push_str(text),
            Token::Variable(name) => push_tag(&mut out, open, close, "", name),
            Token::UnescapedVariable(name) => push_tag(&mut out, open, close, "&", name),
            Token::Comment => push_tag(&mut out, open, close, "!", ""),
            Token::Partial { name, indentation } => {
                if own_line {
                    out.push_str(indentation);
                }
                push_tag(&mut out, open, close, ">", name);
            }
            Token::OpenSection(name) => push_tag(&mut out, open, close, "#", name),
            Token::OpenInvertedSection(name) => push_tag(&mut out, open, close, "^", name),
            Token::OpenOverrideSection(name) => push_tag(&mut out, open, close, "$", name),
            Token::OpenParentSection(name) => push_tag(&mut out, open, close, "<", name),
            Token::CloseSection(name) => push_tag(&mut out, open, close, "/", name),
            Token::SetDelimiters(next) => {
                let body = format!("{} {}=", next.open(), next.close());
                push_tag(&mut out, open, close, "=", &body);
                delimiters = next.clone();
            }
        }

        if own_line {
            out.push('\n');
        }
    }

    out
}

/// Constraint a line's next tag puts on the standalone-capable tag before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineStart {
    /// The next tag is an indented partial and needs a fresh line.
    Required,
    /// A fresh line would make the next tag standalone, trimming the
    /// indentation before it, or hand a partial stray indentation.
    Forbidden,
    Either,
}

/// `plan[i]` is the constraint for a fresh line starting at `tokens[i]`.
///
/// Built back to front, since a run of adjacent tags at a line start passes
/// a requirement from its last tag back to its first.
fn line_start_plan(tokens: &[Token]) -> Vec<LineStart> {
    let mut plan = vec![LineStart::Either; tokens.len() + 1];
    for i in (0..tokens.len()).rev() {
        plan[i] = line_start_at(tokens, i, &plan);
    }
    plan
}

fn line_start_at(tokens: &[Token], i: usize, plan: &[LineStart]) -> LineStart {
    let (gap, next_index) = match &tokens[i] {
        Token::Text(text) if is_indentation(text) => (Some(text.as_str()), i + 1),
        _ => (None, i),
    };
    let Some(next) = tokens.get(next_index) else {
        return LineStart::Either;
    };
    let tail = &tokens[next_index + 1..];

    match next {
        // Content before the next tag keeps it off the line start either way.
        Token::Text(_) => LineStart::Either,
        Token::Partial { indentation, .. } if !indentation.is_empty() => {
            if gap.is_none() || gap == Some(indentation.as_str()) {
                LineStart::Required
            } else {
                LineStart::Either
            }
        }
        _ if !next.is_standalone_capable() => LineStart::Either,
        Token::Partial { .. } if gap.is_some() => LineStart::Forbidden,
        _ if gap.is_some() => {
            if line_ends(tail) {
                LineStart::Forbidden
            } else {
                LineStart::Either
            }
        }
        _ => {
            if !line_ends(tail) && plan[next_index + 1] == LineStart::Required {
                LineStart::Required
            } else {
                LineStart::Either
            }
        }
    }
}

/// Whether a standalone-capable `token` is written on a line of its own,
/// followed by a line break the lexer strips again.
///
/// `leading` is the current line's indentation in the output so far, and
/// `rest` the tokens after `token`.
fn owns_line(token: &Token, leading: Option<&str>, rest: &[Token], after: LineStart) -> bool {
    let Some(leading) = leading else {
        return false;
    };
    match token {
        // A standalone partial's indentation was trimmed from the text
        // before it; the renderer writes it back itself.
        Token::Partial { indentation, .. } if !indentation.is_empty() => leading.is_empty(),
        // Indentation already written belongs to a text token that
        // stripping would trim.
        _ if !leading.is_empty() => false,
        _ => line_ends(rest) || after != LineStart::Forbidden,
    }
}

/// Whether `rest`, written right after a tag, leaves only whitespace up to
/// the next line break or end-of-input.
fn line_ends(rest: &[Token]) -> bool {
    match rest {
        [] => true,
        [Token::Text(text), tail @ ..] => {
            let content = text.trim_start_matches([' ', '\t', '\r']);
            content.starts_with('\n') || (content.is_empty() && tail.is_empty())
        }
        _ => false,
    }
}

fn push_tag(out: &mut String, open: &str, close: &str, sigil: &str, body: &str) {
    out.push_str(open);
    out.push_str(sigil);
    out.push_str(body);
    // A name ending in part of the close delimiter would close the tag early.
    if format!("{body}{close}").find(close) != Some(body.len()) {
        out.push(' ');
    }
    out.push_str(close);
}

/// Spaces and tabs at the end of `out`, if they are all that follows the
/// last line break (or the start of output).
fn line_indentation(out: &str) -> Option<&str> {
    let content = out.trim_end_matches([' ', '\t']);
    (content.is_empty() || content.ends_with('\n')).then(|| &out[content.len()..])
}

fn is_indentation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == ' ' || c == '\t')
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
