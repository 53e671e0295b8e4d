//! `lex` and `canon`: inspect how a template tokenizes.

use stache_lexer::{lex_with, to_template_with, Token};
use tracing::debug;

use super::{exit_with_error, exit_with_lex_error, read_source, FileArgs};

/// Lex a file and display the token stream.
pub fn lex_file(args: &FileArgs) {
    let source = read_source(&args.path).unwrap_or_else(|msg| exit_with_error(&msg));
    let tokens = match lex_with(&source, &args.options) {
        Ok(tokens) => tokens,
        Err(error) => exit_with_lex_error(&args.path, &source, &error),
    };
    debug!(path = %args.path, tokens = tokens.len(), "lexed file");

    if args.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{json}"),
            Err(e) => exit_with_error(&format!("cannot serialize tokens: {e}")),
        }
    } else {
        print!("{}", format_tokens(&args.path, &tokens));
    }
}

/// Lex a file and print it back in canonical tag syntax, starting under the
/// same delimiters it was lexed with.
pub fn canon_file(args: &FileArgs) {
    let source = read_source(&args.path).unwrap_or_else(|msg| exit_with_error(&msg));
    match lex_with(&source, &args.options) {
        Ok(tokens) => print!("{}", to_template_with(&tokens, &args.options)),
        Err(error) => exit_with_lex_error(&args.path, &source, &error),
    }
}

/// Human-readable token listing, one token per line.
fn format_tokens(path: &str, tokens: &[Token]) -> String {
    let mut out = format!("Tokens for '{}' ({} tokens):\n", path, tokens.len());
    for token in tokens {
        let detail = match token {
            Token::Text(text) => format!("{text:?}"),
            Token::Partial { name, indentation } if !indentation.is_empty() => {
                format!("{name} (indent {indentation:?})")
            }
            Token::SetDelimiters(delimiters) => delimiters.to_string(),
            _ => token.name().unwrap_or_default().to_owned(),
        };
        let line = format!("  {:<22} {detail}", token.kind_name());
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
