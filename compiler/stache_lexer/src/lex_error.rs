//! Lexer error types.
//!
//! The scanner's inner steps fail with a bare [`LexErrorReason`]. The
//! top-level loop stamps the first such failure with the cursor position at
//! the moment it happened, producing a [`LexError`]. There is no recovery:
//! one error aborts the whole scan.

use stache_lexer_core::Cursor;
use thiserror::Error;

/// A lexical error with the position where scanning gave up.
///
/// The position is the cursor's position at the point of failure, not the
/// start of the offending tag. For an unterminated tag that is usually
/// end-of-input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{line}:{column}: {reason}")]
pub struct LexError {
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in characters.
    pub column: u32,
    pub reason: LexErrorReason,
}

/// Why scanning failed.
///
/// Closed set; every consumer matches it exhaustively.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexErrorReason {
    /// An opened tag never found its close delimiter. Also raised when an
    /// unescaped `{{{` tag lacks its third brace, and when a delimiter
    /// directive is missing either of its two sequences.
    #[error("missing closing delimiter")]
    MissingClosingDelimiter,
}

impl LexError {
    /// Create an error at an explicit position.
    pub fn new(line: u32, column: u32, reason: LexErrorReason) -> Self {
        Self {
            line,
            column,
            reason,
        }
    }

    /// Stamp `reason` with the cursor's current position.
    pub fn at(cursor: &Cursor<'_>, reason: LexErrorReason) -> Self {
        Self::new(cursor.line(), cursor.column(), reason)
    }
}

impl LexErrorReason {
    /// Short actionable hint for diagnostics.
    pub fn help(self) -> &'static str {
        match self {
            LexErrorReason::MissingClosingDelimiter => {
                "close the tag with the current closing delimiter, or change delimiters with `{{=<open> <close>=}}`"
            }
        }
    }
}

#[cfg(test)]
mod tests;
