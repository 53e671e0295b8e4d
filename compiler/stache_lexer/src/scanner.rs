//! Single-pass template scanner.
//!
//! The scanner alternates between two states: at an open delimiter it scans
//! one tag, anywhere else it scans a literal run up to the next open
//! delimiter. Tags are classified by their sigil, the first non-whitespace
//! character after the open delimiter.
//!
//! # Standalone lines
//!
//! A section, comment, partial, or delimiter tag that is the only content on
//! its line renders nothing there, so the line's indentation and line break
//! are dropped: the line break is skipped in the input, and the indentation
//! is trimmed from the text token emitted just before the tag. That rewrite
//! touches only the last token, never an earlier one.

use stache_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::{Delimiters, LexError, LexErrorReason, Token};

/// Stateful scanner over one template.
///
/// Owns its cursor, the delimiter pair in effect, and the tokens produced so
/// far. Consumed by [`scan()`](Self::scan).
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    delimiters: Delimiters,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner using the default `{{` / `}}` delimiters.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_delimiters(cursor, Delimiters::default())
    }

    /// Create a scanner that starts with a custom delimiter pair.
    pub fn with_delimiters(cursor: Cursor<'a>, delimiters: Delimiters) -> Self {
        Self {
            cursor,
            delimiters,
            tokens: Vec::new(),
        }
    }

    /// The delimiter pair currently in effect.
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Scan the whole input.
    ///
    /// Stops at the first lexical error, stamped with the cursor position
    /// where scanning failed. No partial token list is returned on failure.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_eof() {
            if self.cursor.starts_with(self.delimiters.open()) {
                self.scan_tag()
                    .map_err(|reason| LexError::at(&self.cursor, reason))?;
            } else {
                self.scan_text();
            }
        }
        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    /// Emit everything up to the next open delimiter (or end-of-input) as
    /// one text token.
    fn scan_text(&mut self) {
        let text = self.cursor.pop_until_or_eof(self.delimiters.open());
        self.tokens.push(Token::Text(text.to_owned()));
    }

    /// Scan one tag starting at an open delimiter.
    fn scan_tag(&mut self) -> Result<(), LexErrorReason> {
        let line = self.cursor.line();
        let column = self.cursor.column();
        let leading = self.cursor.leading_whitespace();

        let opened = self.cursor.eat(self.delimiters.open());
        debug_assert!(opened, "scan_tag called away from an open delimiter");
        self.cursor.eat_whitespace();

        let sigil = self
            .cursor
            .pop()
            .ok_or(LexErrorReason::MissingClosingDelimiter)?;
        let content = self
            .cursor
            .pop_until(self.delimiters.close())
            .ok_or(LexErrorReason::MissingClosingDelimiter)?;
        self.cursor.eat(self.delimiters.close());

        let trailing = self.cursor.trailing_whitespace();
        let trimmed = content.trim();

        let token = match sigil {
            '!' => Token::Comment,
            '#' => Token::OpenSection(trimmed.to_owned()),
            '^' => Token::OpenInvertedSection(trimmed.to_owned()),
            '$' => Token::OpenOverrideSection(trimmed.to_owned()),
            '<' => Token::OpenParentSection(trimmed.to_owned()),
            '/' => Token::CloseSection(trimmed.to_owned()),
            '>' => Token::Partial {
                name: trimmed.to_owned(),
                indentation: leading.unwrap_or_default().to_owned(),
            },
            '{' => {
                if !self.cursor.eat("}") {
                    return Err(LexErrorReason::MissingClosingDelimiter);
                }
                Token::UnescapedVariable(trimmed.to_owned())
            }
            '&' => Token::UnescapedVariable(trimmed.to_owned()),
            '=' => {
                let delimiters = Delimiters::parse_directive(content)?;
                debug!(
                    line,
                    column,
                    from = %self.delimiters,
                    to = %delimiters,
                    "delimiters changed"
                );
                self.delimiters = delimiters.clone();
                Token::SetDelimiters(delimiters)
            }
            // The sigil is the first character of a plain variable's name.
            other => {
                let mut name = String::with_capacity(other.len_utf8() + content.len());
                name.push(other);
                name.push_str(content);
                Token::Variable(name.trim().to_owned())
            }
        };

        let standalone = token.is_standalone_capable() && leading.is_some();
        let trailing = trailing.filter(|_| standalone);
        if let Some(trailing) = trailing {
            self.strip_standalone(trailing);
        }
        trace!(
            line,
            column,
            kind = token.kind_name(),
            standalone = trailing.is_some(),
            "tag"
        );

        self.tokens.push(token);
        Ok(())
    }

    /// Drop the whitespace around a standalone tag: skip `trailing` (up to
    /// and including the line break) in the input, and trim trailing spaces
    /// and tabs from the previous token if it is text.
    ///
    /// A text token left empty by the trim is removed.
    fn strip_standalone(&mut self, trailing: &str) {
        self.cursor.skip(trailing);
        let emptied = match self.tokens.last_mut() {
            Some(Token::Text(text)) => {
                let kept = text.trim_end_matches([' ', '\t']).len();
                text.truncate(kept);
                text.is_empty()
            }
            _ => false,
        };
        if emptied {
            self.tokens.pop();
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
