//! The open/close delimiter pair that bounds tags.
//!
//! The pair is scanner state, not global state: each [`Scanner`](crate::Scanner)
//! owns one, and a `{{=<open> <close>=}}` directive replaces it for every
//! later tag. The directive body is parsed by [`Delimiters::parse_directive`]
//! with its own short-lived [`Cursor`], independent of the outer scan.

use std::fmt;

use stache_lexer_core::Cursor;

use crate::LexErrorReason;

/// Open and close character sequences for tags. Defaults to `{{` / `}}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delimiters {
    open: String,
    close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: "{{".to_owned(),
            close: "}}".to_owned(),
        }
    }
}

impl Delimiters {
    /// Create a pair. Returns `None` if either sequence is empty or
    /// contains whitespace, since neither could be found again reliably.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Option<Self> {
        let (open, close) = (open.into(), close.into());
        if is_valid_sequence(&open) && is_valid_sequence(&close) {
            Some(Self { open, close })
        } else {
            None
        }
    }

    /// Parse a user-supplied pair written as `"<open> <close>"`, e.g. `"<% %>"`.
    pub fn parse_pair(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(open), Some(close), None) => Self::new(open, close),
            _ => None,
        }
    }

    /// Parse the body of a delimiter directive.
    ///
    /// `content` is everything between the `=` sigil and the outer close
    /// delimiter, e.g. `"<% %>="` for `{{=<% %>=}}`. Leading whitespace is
    /// skipped, the open sequence runs to the next whitespace, and the close
    /// sequence runs to the terminating `=` with embedded whitespace removed.
    pub fn parse_directive(content: &str) -> Result<Self, LexErrorReason> {
        let mut cursor = Cursor::new(content);
        cursor.eat_whitespace();
        let open = cursor
            .pop_until_char(char::is_whitespace)
            .ok_or(LexErrorReason::MissingClosingDelimiter)?;
        cursor.eat_whitespace();
        let close: String = cursor
            .pop_through("=")
            .ok_or(LexErrorReason::MissingClosingDelimiter)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Self::new(open, close).ok_or(LexErrorReason::MissingClosingDelimiter)
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns `true` for the `{{` / `}}` pair.
    pub fn is_default(&self) -> bool {
        self.open == "{{" && self.close == "}}"
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.open, self.close)
    }
}

fn is_valid_sequence(s: &str) -> bool {
    !s.is_empty() && !s.contains(char::is_whitespace)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
