//! Byte-indexed source cursor with line/column tracking and bounded
//! lookahead. This is the only piece of the lexer that touches raw bytes;
//! everything above it deals in [`char`]s and positions.

/// Walks a `&str` one Unicode scalar value at a time, tracking byte offset
/// and 1-based line/column.
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Current 1-based (line, column).
    #[must_use]
    pub const fn line_col(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    /// Returns the character at the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Returns the character `n` positions ahead of the cursor (`n == 0` is
    /// the same as [`Self::peek`]), without consuming anything. Used for
    /// the small bounded lookahead the grammar needs to disambiguate
    /// multi-character operators and a handful of statement-level forks.
    #[must_use]
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances past the current character, updating line/column, and
    /// returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// True once the cursor has passed the end of the input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the raw text between two byte offsets.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or either offset falls outside the input or
    /// splits a UTF-8 code point — callers only ever pass offsets this
    /// cursor itself produced, so this can't happen in practice.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Returns the full source text the cursor walks.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_byte_offset() {
        let mut c = Cursor::new("abc");
        assert_eq!(c.pos(), 0);
        c.advance();
        assert_eq!(c.pos(), 1);
    }

    #[test]
    fn tracks_line_and_column() {
        let mut c = Cursor::new("ab\ncd");
        assert_eq!(c.line_col(), (1, 1));
        c.advance(); // a
        assert_eq!(c.line_col(), (1, 2));
        c.advance(); // b
        c.advance(); // \n
        assert_eq!(c.line_col(), (2, 1));
        c.advance(); // c
        assert_eq!(c.line_col(), (2, 2));
    }

    #[test]
    fn peek_at_looks_ahead_without_consuming() {
        let c = Cursor::new("abc");
        assert_eq!(c.peek_at(0), Some('a'));
        assert_eq!(c.peek_at(1), Some('b'));
        assert_eq!(c.peek_at(2), Some('c'));
        assert_eq!(c.peek_at(3), None);
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn is_eof_at_end() {
        let mut c = Cursor::new("a");
        assert!(!c.is_eof());
        c.advance();
        assert!(c.is_eof());
    }

    #[test]
    fn slice_returns_raw_text() {
        let c = Cursor::new("hello world");
        assert_eq!(c.slice(0, 5), "hello");
        assert_eq!(c.slice(6, 11), "world");
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut c = Cursor::new("a\u{00e9}b"); // a é b
        assert_eq!(c.advance(), Some('a'));
        assert_eq!(c.advance(), Some('\u{00e9}'));
        assert_eq!(c.pos(), 1 + '\u{00e9}'.len_utf8());
        assert_eq!(c.advance(), Some('b'));
    }
}
