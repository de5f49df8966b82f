//! Token types produced by the lexer.

use crate::diagnostic::LexError;
use crate::keyword::Keyword;
use crate::span::Span;

/// How a `?`/`:name`/`@name`/`$name` parameter placeholder was spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterKind {
    /// Anonymous `?`.
    Anonymous,
    /// Numbered `?N`.
    Numbered(u32),
    /// Named `:name`.
    Colon(String),
    /// Named `@name`.
    At(String),
    /// Named `$name`, including any `::`/`(...)` tcl-style suffix consumed
    /// verbatim as part of the name.
    Dollar(String),
}

/// The kind of a token, with any decoded payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A reserved word, matched case-insensitively.
    Keyword(Keyword),
    /// An identifier: unquoted, or a delimited identifier with quoting
    /// stripped and escapes resolved.
    Ident(String),
    /// A numeric literal, exactly as written in the source (decimal,
    /// float, exponent, or `0x` hex form). Range/overflow are not this
    /// lexer's concern.
    Number(String),
    /// A string literal with quotes stripped and `''` escapes resolved.
    String(String),
    /// A `X'..'`/`x'..'` blob literal, decoded to raw bytes.
    Blob(Vec<u8>),
    /// A bind parameter placeholder.
    Parameter(ParameterKind),

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `*`
    Star,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=` or `==`
    Eq,
    /// `!=` or `<>`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `~`
    BitNot,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `||`
    Concat,
    /// `->`
    Arrow,
    /// `->>`
    Arrow2,

    /// End of input. Exactly one is ever emitted, as the last token.
    Eof,
    /// A lex failure (unterminated literal, invalid blob hex, stray
    /// character). Carries the [`LexError`] the scanner raised at this
    /// position, so a caller inspecting tokens directly (or the parser,
    /// the first time it reaches this token) can turn it into a
    /// [`crate::diagnostic::Diagnostic`] without re-deriving what went
    /// wrong from a plain string.
    Error(LexError),
}

impl TokenKind {
    /// Short label used in diagnostics ("expected X, found <label>").
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Keyword(kw) => kw.as_str().to_string(),
            Self::Ident(_) => "identifier".to_string(),
            Self::Number(_) => "number".to_string(),
            Self::String(_) => "string literal".to_string(),
            Self::Blob(_) => "blob literal".to_string(),
            Self::Parameter(_) => "parameter".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Semicolon => "';'".to_string(),
            Self::Dot => "'.'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Percent => "'%'".to_string(),
            Self::Eq => "'='".to_string(),
            Self::NotEq => "'!='".to_string(),
            Self::Lt => "'<'".to_string(),
            Self::LtEq => "'<='".to_string(),
            Self::Gt => "'>'".to_string(),
            Self::GtEq => "'>='".to_string(),
            Self::BitAnd => "'&'".to_string(),
            Self::BitOr => "'|'".to_string(),
            Self::BitNot => "'~'".to_string(),
            Self::Shl => "'<<'".to_string(),
            Self::Shr => "'>>'".to_string(),
            Self::Concat => "'||'".to_string(),
            Self::Arrow => "'->'".to_string(),
            Self::Arrow2 => "'->>'".to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Error(err) => err.to_string(),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The kind of token, with any decoded value.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// True for the terminating `EOF` token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword this token carries, if any.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_eof_only_for_eof_kind() {
        let eof = Token::new(TokenKind::Eof, Span::default());
        let other = Token::new(TokenKind::Star, Span::default());
        assert!(eof.is_eof());
        assert!(!other.is_eof());
    }

    #[test]
    fn as_keyword_unwraps_keyword_tokens() {
        let tok = Token::new(TokenKind::Keyword(Keyword::Select), Span::default());
        assert_eq!(tok.as_keyword(), Some(Keyword::Select));
        let tok = Token::new(TokenKind::Star, Span::default());
        assert_eq!(tok.as_keyword(), None);
    }
}
