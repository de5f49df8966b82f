//! A standalone recursive-descent parser for the SQLite SQL dialect.
//!
//! Given a source string containing one or more statements, [`parse`]
//! produces a typed, span-carrying abstract syntax tree plus any
//! diagnostics raised along the way. The parser never executes
//! queries, never touches a filesystem, and never validates a schema;
//! it only understands grammar.
//!
//! ```
//! let (statements, diagnostics) = sqlite_parser::parse("SELECT 1 + 2;");
//! assert_eq!(statements.len(), 1);
//! assert!(diagnostics.is_empty());
//! ```
//!
//! Malformed input doesn't abort the whole parse: the driver recovers
//! at the next statement boundary and keeps going, so a typo in one
//! statement doesn't hide the ones after it.
//!
//! ```
//! let (statements, diagnostics) = sqlite_parser::parse("SELEC * FROM t; SELECT 1;");
//! assert_eq!(statements.len(), 1);
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod ast;
pub mod diagnostic;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token_stream;

pub use ast::Statement;
pub use diagnostic::{Diagnostic, LexError, Severity, StructuralError, SyntaxError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
pub use span::Span;

/// Lexes `source` into its raw token sequence, without parsing.
///
/// Exposed mainly for debugging and for the `sqlparse --tokens` CLI
/// mode; [`parse`] already tokenizes internally and is the entry point
/// most callers want.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
