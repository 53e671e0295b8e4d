//! Low-level character cursor for stache templates.
//!
//! This crate has no `stache_*` dependencies. It knows nothing about tags,
//! sigils, or tokens: it only reads characters, finds patterns, and reports
//! positions. The template scanner in `stache_lexer` drives it.
//!
//! # Usage
//!
//! ```
//! use stache_lexer_core::Cursor;
//!
//! let mut cursor = Cursor::new("Hello {{name}}!");
//! assert_eq!(cursor.pop_until_or_eof("{{"), "Hello ");
//! assert!(cursor.eat("{{"));
//! assert_eq!(cursor.pop_until("}}"), Some("name"));
//! assert_eq!((cursor.line(), cursor.column()), (1, 13));
//! ```

mod cursor;

pub use cursor::Cursor;
