//! The lexer itself.
//!
//! SQLite's tokenizer is not purely regular: once a `'`, `"`, `[`, `` ` ``,
//! `--`, or `/*` is seen, the character rules change until the matching
//! terminator (an unescaped quote/bracket/backtick, a newline, or `*/`).
//! Rather than threading an explicit mode through a stack, each of those
//! regions gets its own scan function (`scan_string`, `scan_quoted_ident`,
//! `scan_bracket_ident`, `skip_line_comment`, `skip_block_comment`) that
//! runs its region to completion before `next_token` resumes normal
//! dispatch; nesting does not occur in SQLite's grammar (block comments,
//! in particular, explicitly do not nest), so a single dispatch level is
//! enough.

use tracing::trace;

use crate::diagnostic::LexError;
use crate::keyword::Keyword;
use crate::span::Span;

use super::cursor::Cursor;
use super::token::{ParameterKind, Token, TokenKind};

/// Scans a source string into a flat sequence of [`Token`]s.
///
/// The lexer never stops at the first error: a malformed literal or a
/// stray character produces a single [`TokenKind::Error`] token and
/// scanning resumes right after the offending text, so the parser's
/// recovery logic always has a complete token stream to work with.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Scans the entire input and returns its tokens, always ending with
    /// exactly one [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            trace!(kind = ?tok.kind, span = ?tok.span, "lexed token");
            let is_eof = tok.is_eof();
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn start(&self) -> (usize, u32, u32) {
        let (line, column) = self.cursor.line_col();
        (self.cursor.pos(), line, column)
    }

    fn span_from(&self, start: (usize, u32, u32)) -> Span {
        Span::new(start.0, self.cursor.pos(), start.1, start.2)
    }

    /// Skips whitespace and comments, then scans exactly one token.
    fn next_token(&mut self) -> Token {
        loop {
            match self.cursor.peek() {
                None => {
                    let start = self.start();
                    return Token::new(TokenKind::Eof, self.span_from(start));
                }
                Some(c) if c.is_whitespace() => {
                    self.cursor.advance();
                    continue;
                }
                Some('-') if self.cursor.peek_at(1) == Some('-') => {
                    self.skip_line_comment();
                    continue;
                }
                Some('/') if self.cursor.peek_at(1) == Some('*') => {
                    if let Some(err) = self.skip_block_comment() {
                        return err;
                    }
                    continue;
                }
                _ => break,
            }
        }

        let start = self.start();
        let c = self.cursor.peek().expect("checked above");

        match c {
            '\'' => self.scan_string(start),
            '"' => self.scan_quoted_ident('"', start),
            '[' => self.scan_bracket_ident(start),
            '`' => self.scan_quoted_ident('`', start),
            '?' => self.scan_parameter_question(start),
            ':' => self.scan_parameter_prefixed(':', start),
            '@' => self.scan_parameter_prefixed('@', start),
            '$' => self.scan_parameter_prefixed('$', start),
            '0'..='9' => self.scan_number(start),
            '.' if self.cursor.peek_at(1).is_some_and(|d| d.is_ascii_digit()) => {
                self.scan_number(start)
            }
            c if is_ident_start(c) => self.scan_ident_or_keyword_or_blob(start),
            _ => self.scan_operator(start),
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Returns `Some(error token)` if the block comment never closes.
    fn skip_block_comment(&mut self) -> Option<Token> {
        let start = self.start();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            match self.cursor.peek() {
                None => {
                    let span = self.span_from(start);
                    return Some(Token::new(
                        TokenKind::Error(LexError::UnterminatedBlockComment { span }),
                        span,
                    ));
                }
                Some('*') if self.cursor.peek_at(1) == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return None;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn scan_string(&mut self, start: (usize, u32, u32)) -> Token {
        self.cursor.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    let span = self.span_from(start);
                    return Token::new(
                        TokenKind::Error(LexError::UnterminatedLiteral {
                            span,
                            detail: "string literal".to_string(),
                        }),
                        span,
                    );
                }
                Some('\'') if self.cursor.peek_at(1) == Some('\'') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    value.push('\'');
                }
                Some('\'') => {
                    self.cursor.advance();
                    return Token::new(TokenKind::String(value), self.span_from(start));
                }
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }
    }

    fn scan_quoted_ident(&mut self, quote: char, start: (usize, u32, u32)) -> Token {
        self.cursor.advance(); // opening quote
        let kind = if quote == '"' { "double-quoted" } else { "backtick-quoted" };
        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    let span = self.span_from(start);
                    return Token::new(
                        TokenKind::Error(LexError::UnterminatedLiteral {
                            span,
                            detail: format!("{kind} identifier"),
                        }),
                        span,
                    );
                }
                Some(c) if c == quote && self.cursor.peek_at(1) == Some(quote) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    value.push(quote);
                }
                Some(c) if c == quote => {
                    self.cursor.advance();
                    return Token::new(TokenKind::Ident(value), self.span_from(start));
                }
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }
    }

    fn scan_bracket_ident(&mut self, start: (usize, u32, u32)) -> Token {
        self.cursor.advance(); // '['
        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    let span = self.span_from(start);
                    return Token::new(
                        TokenKind::Error(LexError::UnterminatedLiteral {
                            span,
                            detail: "bracketed identifier".to_string(),
                        }),
                        span,
                    );
                }
                Some(']') => {
                    self.cursor.advance();
                    return Token::new(TokenKind::Ident(value), self.span_from(start));
                }
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }
    }

    fn scan_parameter_question(&mut self, start: (usize, u32, u32)) -> Token {
        self.cursor.advance(); // '?'
        let mut digits = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        let kind = if digits.is_empty() {
            ParameterKind::Anonymous
        } else {
            match digits.parse() {
                Ok(n) => ParameterKind::Numbered(n),
                Err(_) => {
                    let span = self.span_from(start);
                    return Token::new(
                        TokenKind::Error(LexError::InvalidLiteral {
                            span,
                            detail: format!("parameter index '{digits}' out of range"),
                        }),
                        span,
                    );
                }
            }
        };
        Token::new(TokenKind::Parameter(kind), self.span_from(start))
    }

    fn scan_parameter_prefixed(&mut self, prefix: char, start: (usize, u32, u32)) -> Token {
        self.cursor.advance(); // prefix char
        let mut name = String::new();
        while let Some(c) = self.cursor.peek() {
            if is_ident_continue(c) {
                name.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        if name.is_empty() {
            let span = self.span_from(start);
            return Token::new(
                TokenKind::Error(LexError::InvalidLiteral {
                    span,
                    detail: format!("expected name after '{prefix}'"),
                }),
                span,
            );
        }
        if prefix == '$' {
            // `$name::text`/`$name(...)` suffixes are consumed verbatim as
            // part of the parameter name, matching SQLite's tcl-variable
            // compatible parameter syntax.
            while self.cursor.peek() == Some(':') && self.cursor.peek_at(1) == Some(':') {
                self.cursor.advance();
                self.cursor.advance();
                name.push_str("::");
                while let Some(c) = self.cursor.peek() {
                    if is_ident_continue(c) {
                        name.push(c);
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
            }
        }
        let kind = match prefix {
            ':' => ParameterKind::Colon(name),
            '@' => ParameterKind::At(name),
            _ => ParameterKind::Dollar(name),
        };
        Token::new(TokenKind::Parameter(kind), self.span_from(start))
    }

    fn scan_number(&mut self, start: (usize, u32, u32)) -> Token {
        let text_start = self.cursor.pos();

        if self.cursor.peek() == Some('0')
            && matches!(self.cursor.peek_at(1), Some('x') | Some('X'))
        {
            self.cursor.advance();
            self.cursor.advance();
            let mut saw_digit = false;
            while let Some(c) = self.cursor.peek() {
                if c.is_ascii_hexdigit() {
                    saw_digit = true;
                    self.cursor.advance();
                } else {
                    break;
                }
            }
            if !saw_digit {
                let span = self.span_from(start);
                return Token::new(
                    TokenKind::Error(LexError::InvalidLiteral {
                        span,
                        detail: "invalid hexadecimal literal".to_string(),
                    }),
                    span,
                );
            }
            let text = self.cursor.slice(text_start, self.cursor.pos());
            return Token::new(TokenKind::Number(text.to_string()), self.span_from(start));
        }

        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
        if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.cursor.advance();
            }
        }
        if matches!(self.cursor.peek(), Some('e') | Some('E')) {
            let mut lookahead = 1;
            if matches!(self.cursor.peek_at(1), Some('+') | Some('-')) {
                lookahead = 2;
            }
            if self.cursor.peek_at(lookahead).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..=lookahead {
                    self.cursor.advance();
                }
                while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.cursor.advance();
                }
            }
        }

        let text = self.cursor.slice(text_start, self.cursor.pos());
        Token::new(TokenKind::Number(text.to_string()), self.span_from(start))
    }

    fn scan_ident_or_keyword_or_blob(&mut self, start: (usize, u32, u32)) -> Token {
        let text_start = self.cursor.pos();
        let first = self.cursor.peek().expect("checked by caller");
        self.cursor.advance();
        while self.cursor.peek().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }
        let text = self.cursor.slice(text_start, self.cursor.pos());

        if matches!(first, 'x' | 'X') && text.len() == 1 && self.cursor.peek() == Some('\'') {
            return self.scan_blob(start);
        }

        if let Some(kw) = Keyword::from_str(text) {
            return Token::new(TokenKind::Keyword(kw), self.span_from(start));
        }
        Token::new(TokenKind::Ident(text.to_string()), self.span_from(start))
    }

    fn scan_blob(&mut self, start: (usize, u32, u32)) -> Token {
        self.cursor.advance(); // opening quote
        let mut hex = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    let span = self.span_from(start);
                    return Token::new(
                        TokenKind::Error(LexError::UnterminatedLiteral {
                            span,
                            detail: "blob literal".to_string(),
                        }),
                        span,
                    );
                }
                Some('\'') => {
                    self.cursor.advance();
                    break;
                }
                Some(c) => {
                    hex.push(c);
                    self.cursor.advance();
                }
            }
        }
        if hex.len() % 2 != 0 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let span = self.span_from(start);
            return Token::new(
                TokenKind::Error(LexError::InvalidLiteral {
                    span,
                    detail: format!("invalid blob literal hex digits: {hex}"),
                }),
                span,
            );
        }
        let bytes = hex
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                let s = std::str::from_utf8(pair).expect("ascii hex digits");
                u8::from_str_radix(s, 16).expect("validated hex digits")
            })
            .collect();
        Token::new(TokenKind::Blob(bytes), self.span_from(start))
    }

    /// Scans punctuation and operators, applying maximal munch for the
    /// multi-character forms.
    fn scan_operator(&mut self, start: (usize, u32, u32)) -> Token {
        let c = self.cursor.advance().expect("checked by caller");
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '*' => TokenKind::Star,
            '+' => TokenKind::Plus,
            '-' => {
                if self.cursor.peek() == Some('>') {
                    self.cursor.advance();
                    if self.cursor.peek() == Some('>') {
                        self.cursor.advance();
                        TokenKind::Arrow2
                    } else {
                        TokenKind::Arrow
                    }
                } else {
                    TokenKind::Minus
                }
            }
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                }
                TokenKind::Eq
            }
            '!' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    TokenKind::NotEq
                } else {
                    let span = self.span_from(start);
                    return Token::new(
                        TokenKind::Error(LexError::UnexpectedCharacter {
                            span,
                            detail: "unexpected '!'".to_string(),
                        }),
                        span,
                    );
                }
            }
            '<' => match self.cursor.peek() {
                Some('=') => {
                    self.cursor.advance();
                    TokenKind::LtEq
                }
                Some('>') => {
                    self.cursor.advance();
                    TokenKind::NotEq
                }
                Some('<') => {
                    self.cursor.advance();
                    TokenKind::Shl
                }
                _ => TokenKind::Lt,
            },
            '>' => match self.cursor.peek() {
                Some('=') => {
                    self.cursor.advance();
                    TokenKind::GtEq
                }
                Some('>') => {
                    self.cursor.advance();
                    TokenKind::Shr
                }
                _ => TokenKind::Gt,
            },
            '&' => TokenKind::BitAnd,
            '~' => TokenKind::BitNot,
            '|' => {
                if self.cursor.peek() == Some('|') {
                    self.cursor.advance();
                    TokenKind::Concat
                } else {
                    TokenKind::BitOr
                }
            }
            other => {
                let span = self.span_from(start);
                return Token::new(
                    TokenKind::Error(LexError::UnexpectedCharacter {
                        span,
                        detail: format!("unexpected character '{other}'"),
                    }),
                    span,
                );
            }
        };
        Token::new(kind, self.span_from(start))
    }
}

/// True for characters that can start an unquoted identifier: ASCII
/// letters, `_`, and any non-ASCII Unicode letter (SQLite treats
/// high-bit-set bytes as identifier characters).
fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// True for characters that can continue (but not necessarily start) an
/// unquoted identifier. `$` is included so a mid-identifier dollar sign
/// (`foo$bar`) stays part of the identifier rather than starting a
/// `$name` parameter; a leading `$` never reaches here since it's
/// dispatched straight to parameter scanning before an identifier scan
/// begins.
fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_simple_select() {
        let ks = kinds("SELECT 1");
        assert_eq!(
            ks,
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Number("1".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let ks = kinds("select SeLeCt SELECT");
        for k in ks.into_iter().take(3) {
            assert_eq!(k, TokenKind::Keyword(Keyword::Select));
        }
    }

    #[test]
    fn string_literal_resolves_doubled_quote_escape() {
        let ks = kinds("'it''s'");
        assert_eq!(ks[0], TokenKind::String("it's".to_string()));
    }

    #[test]
    fn double_quoted_identifier_is_ident_not_string() {
        let ks = kinds("\"col\"");
        assert_eq!(ks[0], TokenKind::Ident("col".to_string()));
    }

    #[test]
    fn bracket_and_backtick_identifiers() {
        assert_eq!(kinds("[col]")[0], TokenKind::Ident("col".to_string()));
        assert_eq!(kinds("`col`")[0], TokenKind::Ident("col".to_string()));
    }

    #[test]
    fn blob_literal_decodes_hex() {
        let ks = kinds("X'AABB'");
        assert_eq!(ks[0], TokenKind::Blob(vec![0xAA, 0xBB]));
    }

    #[test]
    fn odd_length_blob_is_error() {
        let ks = kinds("X'ABC'");
        assert!(matches!(ks[0], TokenKind::Error(_)));
    }

    #[test]
    fn maximal_munch_operators() {
        assert_eq!(kinds("<>")[0], TokenKind::NotEq);
        assert_eq!(kinds("!=")[0], TokenKind::NotEq);
        assert_eq!(kinds("==")[0], TokenKind::Eq);
        assert_eq!(kinds("<=")[0], TokenKind::LtEq);
        assert_eq!(kinds(">=")[0], TokenKind::GtEq);
        assert_eq!(kinds("<<")[0], TokenKind::Shl);
        assert_eq!(kinds(">>")[0], TokenKind::Shr);
        assert_eq!(kinds("||")[0], TokenKind::Concat);
        assert_eq!(kinds("->")[0], TokenKind::Arrow);
        assert_eq!(kinds("->>")[0], TokenKind::Arrow2);
    }

    #[test]
    fn parameter_styles() {
        assert_eq!(kinds("?")[0], TokenKind::Parameter(ParameterKind::Anonymous));
        assert_eq!(
            kinds("?42")[0],
            TokenKind::Parameter(ParameterKind::Numbered(42))
        );
        assert_eq!(
            kinds(":name")[0],
            TokenKind::Parameter(ParameterKind::Colon("name".to_string()))
        );
        assert_eq!(
            kinds("@name")[0],
            TokenKind::Parameter(ParameterKind::At("name".to_string()))
        );
        assert_eq!(
            kinds("$name")[0],
            TokenKind::Parameter(ParameterKind::Dollar("name".to_string()))
        );
    }

    #[test]
    fn dollar_mid_identifier_stays_part_of_the_identifier() {
        assert_eq!(
            kinds("foo$bar"),
            vec![TokenKind::Ident("foo$bar".to_string()), TokenKind::Eof]
        );
    }

    #[test]
    fn line_and_block_comments_are_skipped() {
        let ks = kinds("SELECT -- trailing comment\n1 /* mid */ + 2");
        assert_eq!(
            ks,
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Number("1".to_string()),
                TokenKind::Plus,
                TokenKind::Number("2".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_yields_error_token_not_panic() {
        let ks = kinds("'abc");
        assert!(matches!(ks[0], TokenKind::Error(_)));
        assert_eq!(ks[1], TokenKind::Eof);
    }

    #[test]
    fn unterminated_block_comment_yields_error_then_eof() {
        let ks = kinds("/* never closes");
        assert!(matches!(ks[0], TokenKind::Error(_)));
        assert_eq!(ks[1], TokenKind::Eof);
    }

    #[test]
    fn number_forms() {
        assert_eq!(kinds("123")[0], TokenKind::Number("123".to_string()));
        assert_eq!(kinds("1.5")[0], TokenKind::Number("1.5".to_string()));
        assert_eq!(kinds("1e10")[0], TokenKind::Number("1e10".to_string()));
        assert_eq!(kinds("1.5e-3")[0], TokenKind::Number("1.5e-3".to_string()));
        assert_eq!(kinds("0x1F")[0], TokenKind::Number("0x1F".to_string()));
        assert_eq!(kinds(".5")[0], TokenKind::Number(".5".to_string()));
    }

    #[test]
    fn every_token_span_is_well_formed() {
        for tok in Lexer::new("SELECT * FROM t WHERE a = 1;").tokenize() {
            assert!(tok.span.start <= tok.span.end);
        }
    }
}
