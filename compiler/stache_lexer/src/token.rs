//! Template tokens.
//!
//! [`Token`] is a closed sum type: one variant per lexical unit. Consumers
//! match it exhaustively, so adding a tag kind is a compile-checked change.

use crate::Delimiters;

/// One lexical unit of a template, in document order.
///
/// Equality is structural over every variant and payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Literal output run.
    Text(String),
    /// Escaped interpolation: `{{name}}`.
    Variable(String),
    /// Raw interpolation: `{{{name}}}` or `{{&name}}`.
    UnescapedVariable(String),
    /// `{{! ... }}`; the content is discarded.
    Comment,
    /// `{{> name}}`, with the whitespace that preceded the tag on its line
    /// so a later stage can re-indent the partial's content.
    Partial { name: String, indentation: String },
    /// `{{# name}}`
    OpenSection(String),
    /// `{{^ name}}`
    OpenInvertedSection(String),
    /// `{{$ name}}`
    OpenOverrideSection(String),
    /// `{{< name}}`
    OpenParentSection(String),
    /// `{{/ name}}`
    CloseSection(String),
    /// `{{=<open> <close>=}}`; carries the pair in effect for later tags.
    SetDelimiters(Delimiters),
}

impl Token {
    /// Stable lowercase name of the variant, for dumps and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Text(_) => "text",
            Token::Variable(_) => "variable",
            Token::UnescapedVariable(_) => "unescaped_variable",
            Token::Comment => "comment",
            Token::Partial { .. } => "partial",
            Token::OpenSection(_) => "open_section",
            Token::OpenInvertedSection(_) => "open_inverted_section",
            Token::OpenOverrideSection(_) => "open_override_section",
            Token::OpenParentSection(_) => "open_parent_section",
            Token::CloseSection(_) => "close_section",
            Token::SetDelimiters(_) => "set_delimiters",
        }
    }

    /// The sigil that introduces this tag, `None` for text and plain
    /// variables. Unescaped variables report `&`.
    pub fn sigil(&self) -> Option<char> {
        match self {
            Token::Text(_) | Token::Variable(_) => None,
            Token::UnescapedVariable(_) => Some('&'),
            Token::Comment => Some('!'),
            Token::Partial { .. } => Some('>'),
            Token::OpenSection(_) => Some('#'),
            Token::OpenInvertedSection(_) => Some('^'),
            Token::OpenOverrideSection(_) => Some('$'),
            Token::OpenParentSection(_) => Some('<'),
            Token::CloseSection(_) => Some('/'),
            Token::SetDelimiters(_) => Some('='),
        }
    }

    /// The identifier a tag refers to. `None` for text, comments, and
    /// delimiter changes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Variable(name)
            | Token::UnescapedVariable(name)
            | Token::Partial { name, .. }
            | Token::OpenSection(name)
            | Token::OpenInvertedSection(name)
            | Token::OpenOverrideSection(name)
            | Token::OpenParentSection(name)
            | Token::CloseSection(name) => Some(name.as_str()),
            Token::Text(_) | Token::Comment | Token::SetDelimiters(_) => None,
        }
    }

    /// Returns `true` for literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// Whether a tag of this kind that sits alone on its line has that
    /// line's whitespace and line break removed.
    ///
    /// Interpolations render content in place, so they never qualify.
    pub fn is_standalone_capable(&self) -> bool {
        match self {
            Token::Text(_) | Token::Variable(_) | Token::UnescapedVariable(_) => false,
            Token::Comment
            | Token::Partial { .. }
            | Token::OpenSection(_)
            | Token::OpenInvertedSection(_)
            | Token::OpenOverrideSection(_)
            | Token::OpenParentSection(_)
            | Token::CloseSection(_)
            | Token::SetDelimiters(_) => true,
        }
    }
}
