//! Lexer for stache (Mustache-family) templates.
//!
//! Turns template text into an ordered list of [`Token`]s: literal text runs,
//! interpolations, section and partial markers, comments, and delimiter
//! changes. Reports lexical errors only; matching sections, resolving
//! partials, and rendering belong to later stages.
//!
//! # Usage
//!
//! ```
//! use stache_lexer::{lex, Token};
//!
//! let tokens = lex("Hello {{name}}!").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Text("Hello ".into()),
//!         Token::Variable("name".into()),
//!         Token::Text("!".into()),
//!     ]
//! );
//! ```

mod canonical;
mod delimiters;
mod lex_error;
mod scanner;
mod token;

pub use canonical::{to_template, to_template_with};
pub use delimiters::Delimiters;
pub use lex_error::{LexError, LexErrorReason};
pub use scanner::Scanner;
pub use stache_lexer_core::Cursor;
pub use token::Token;

/// Options for a lexing run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOptions {
    /// Delimiter pair in effect at the start of the template.
    pub delimiters: Delimiters,
}

impl LexOptions {
    /// Start with a custom delimiter pair instead of `{{` / `}}`.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }
}

/// Lex a template with the default `{{` / `}}` delimiters.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    lex_with(source, &LexOptions::default())
}

/// Lex a template with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with(source: &str, options: &LexOptions) -> Result<Vec<Token>, LexError> {
    Scanner::with_delimiters(Cursor::new(source), options.delimiters.clone()).scan()
}
