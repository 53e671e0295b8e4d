//! Position-tracking cursor over template source text.
//!
//! The cursor advances through a `&str` and keeps a 1-based line/column
//! pair for diagnostics. All movement goes through a single private
//! `advance_to`, so position bookkeeping cannot drift from the byte offset.
//!
//! # Look-back
//!
//! Unlike a plain iterator, the cursor keeps the whole source, so it can
//! answer questions about input it has already consumed. The scanner uses
//! this for [`leading_whitespace()`](Cursor::leading_whitespace), which
//! decides whether a tag starts its line.
//!
//! # Misses
//!
//! The pattern-bounded reads ([`pop_until`](Cursor::pop_until),
//! [`pop_through`](Cursor::pop_through),
//! [`pop_until_char`](Cursor::pop_until_char)) run to end-of-input when the
//! pattern never occurs. A caller that reports the miss therefore sees the
//! position where the search gave up.

use memchr::memmem;

/// Position-tracking cursor over a `&str`.
///
/// The cursor is [`Copy`], so a snapshot for look-ahead is a plain copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// 1-based line of the next unread character.
    line: u32,
    /// 1-based column (in characters) of the next unread character.
    column: u32,
}

/// &str = 16 (fat pointer), usize = 8, u32 = 4, u32 = 4 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src` (line 1, column 1).
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the next unread character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the next unread character, counted in `char`s.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The full source this cursor reads from.
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Extract a source substring by byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Offsets taken from [`pos()`](Self::pos) always satisfy this.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start..end]
    }

    /// Extract the source from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Look at up to `n` characters without consuming them.
    ///
    /// Returns fewer than `n` characters near the end of the input.
    pub fn peek(&self, n: usize) -> &'a str {
        let rest = self.rest();
        let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    /// Returns `true` if the unconsumed input begins with `pattern`.
    #[inline]
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.rest().starts_with(pattern)
    }

    /// Consume one character. Returns `None` at end-of-input.
    pub fn pop(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.advance_to(self.pos + c.len_utf8());
        Some(c)
    }

    /// Consume up to `n` characters and return them.
    pub fn pop_n(&mut self, n: usize) -> &'a str {
        let taken = self.peek(n);
        self.advance_to(self.pos + taken.len());
        taken
    }

    /// Consume everything before the next occurrence of `pattern`.
    ///
    /// The pattern itself is left unconsumed. If `pattern` never occurs the
    /// cursor moves to end-of-input and `None` is returned.
    pub fn pop_until(&mut self, pattern: &str) -> Option<&'a str> {
        let start = self.pos;
        if let Some(offset) = memmem::find(self.rest().as_bytes(), pattern.as_bytes()) {
            self.advance_to(start + offset);
            Some(self.slice_from(start))
        } else {
            self.advance_to(self.src.len());
            None
        }
    }

    /// Consume everything before the next occurrence of `pattern`, or the
    /// rest of the input if it never occurs.
    ///
    /// Running to end-of-input is a normal outcome here, not a miss.
    pub fn pop_until_or_eof(&mut self, pattern: &str) -> &'a str {
        let start = self.pos;
        let end = memmem::find(self.rest().as_bytes(), pattern.as_bytes())
            .map_or(self.src.len(), |offset| start + offset);
        self.advance_to(end);
        self.slice_from(start)
    }

    /// Like [`pop_until`](Self::pop_until), but also consumes and discards
    /// the pattern.
    pub fn pop_through(&mut self, pattern: &str) -> Option<&'a str> {
        let taken = self.pop_until(pattern)?;
        self.advance_to(self.pos + pattern.len());
        Some(taken)
    }

    /// Consume everything before the first character matching `pred`.
    ///
    /// The matching character is left unconsumed. If no character matches,
    /// the cursor moves to end-of-input and `None` is returned.
    pub fn pop_until_char(&mut self, pred: impl FnMut(char) -> bool) -> Option<&'a str> {
        let start = self.pos;
        if let Some(offset) = self.rest().find(pred) {
            self.advance_to(start + offset);
            Some(self.slice_from(start))
        } else {
            self.advance_to(self.src.len());
            None
        }
    }

    /// Consume `pattern` if the input starts with it.
    pub fn eat(&mut self, pattern: &str) -> bool {
        if self.starts_with(pattern) {
            self.advance_to(self.pos + pattern.len());
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds, at most `limit` characters if given.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(
        &mut self,
        mut pred: impl FnMut(char) -> bool,
        limit: Option<usize>,
    ) -> usize {
        let mut end = self.pos;
        let mut count = 0;
        for c in self.rest().chars() {
            if limit.is_some_and(|limit| count >= limit) || !pred(c) {
                break;
            }
            end += c.len_utf8();
            count += 1;
        }
        self.advance_to(end);
        count
    }

    /// Advance past any whitespace, line breaks included.
    pub fn eat_whitespace(&mut self) -> usize {
        self.eat_while(char::is_whitespace, None)
    }

    /// The spaces and tabs immediately before the cursor, if nothing but
    /// such whitespace separates the cursor from the previous line break
    /// (or from start-of-input).
    ///
    /// Returns `Some("")` at the very start of a line and `None` when other
    /// content precedes the cursor on its line. Never moves the cursor.
    pub fn leading_whitespace(&self) -> Option<&'a str> {
        let before = &self.src[..self.pos];
        let content = before.trim_end_matches(is_inline_whitespace);
        if content.is_empty() || content.ends_with('\n') {
            Some(&before[content.len()..])
        } else {
            None
        }
    }

    /// The whitespace after the cursor through the next line break
    /// (inclusive), or through end-of-input, if nothing else intervenes.
    ///
    /// A `\r` before the `\n` counts as whitespace, so CRLF endings are
    /// covered. Returns `None` when other content follows on the same line.
    /// Never moves the cursor; pair with [`pop_n`](Self::pop_n) or
    /// [`skip`](Self::skip) to discard the run.
    pub fn trailing_whitespace(&self) -> Option<&'a str> {
        let rest = self.rest();
        let content = rest.trim_start_matches(|c: char| is_inline_whitespace(c) || c == '\r');
        let run = rest.len() - content.len();
        if content.is_empty() {
            Some(rest)
        } else if content.starts_with('\n') {
            Some(&rest[..=run])
        } else {
            None
        }
    }

    /// Advance past `text`, which must be a prefix of the unconsumed input
    /// (typically a span returned by one of the reporting methods).
    pub fn skip(&mut self, text: &str) {
        debug_assert!(
            self.starts_with(text),
            "skipped text {text:?} is not at the cursor"
        );
        self.advance_to(self.pos + text.len());
    }

    /// Move to byte offset `end`, updating line and column for everything
    /// in between.
    fn advance_to(&mut self, end: usize) {
        debug_assert!(
            self.pos <= end && end <= self.src.len(),
            "advance from {} to {end} outside source of length {}",
            self.pos,
            self.src.len()
        );
        let skipped = &self.src[self.pos..end];
        let bytes = skipped.as_bytes();
        if let Some(last) = memchr::memrchr(b'\n', bytes) {
            let newlines = memchr::memchr_iter(b'\n', bytes).count();
            self.line = self.line.saturating_add(saturating_u32(newlines));
            self.column = saturating_u32(skipped[last + 1..].chars().count()).saturating_add(1);
        } else {
            self.column = self
                .column
                .saturating_add(saturating_u32(skipped.chars().count()));
        }
        self.pos = end;
    }
}

/// Horizontal whitespace: space and tab.
fn is_inline_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
