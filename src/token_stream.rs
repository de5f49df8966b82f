//! A peekable, restartable view over an already-lexed token sequence.
//!
//! The parser never talks to the [`Lexer`](crate::lexer::Lexer) directly:
//! it consumes a [`TokenStream`], which owns the full `Vec<Token>` up
//! front and exposes bounded lookahead plus a mark/reset pair for the
//! handful of places the grammar needs to try an alternative and back
//! out (e.g. distinguishing a CTE's column list from its body).

use crate::lexer::Token;

/// A cursor over a pre-lexed token vector.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wraps a token vector. `tokens` must end with an `Eof` token, as
    /// produced by [`crate::lexer::Lexer::tokenize`].
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the token `n` positions ahead of the cursor without
    /// consuming anything. Past the end of input this returns the final
    /// `Eof` token repeatedly.
    #[must_use]
    pub fn peek(&self, n: usize) -> &Token {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Consumes and returns the current token, advancing the cursor. At
    /// end of input this keeps returning `Eof` without moving past it.
    pub fn advance(&mut self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    /// Returns the most recently consumed token, i.e. the one `advance`
    /// last returned. Before any `advance` call this is the first token.
    #[must_use]
    pub fn previous(&self) -> &Token {
        let idx = self.pos.saturating_sub(1);
        &self.tokens[idx]
    }

    /// The cursor's current position, usable with [`Self::reset`].
    #[must_use]
    pub const fn mark(&self) -> usize {
        self.pos
    }

    /// Rewinds the cursor to a previously taken [`Self::mark`].
    pub fn reset(&mut self, mark: usize) {
        self.pos = mark;
    }

    /// True once the cursor sits on the terminating `Eof` token.
    #[must_use]
    pub fn at_eof(&self) -> bool {
        self.current().is_eof()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn stream(src: &str) -> TokenStream {
        TokenStream::new(Lexer::new(src).tokenize())
    }

    #[test]
    fn peek_does_not_consume() {
        let s = stream("SELECT 1");
        let first = s.peek(0).kind.clone();
        let still_first = s.peek(0).kind.clone();
        assert_eq!(first, still_first);
    }

    #[test]
    fn advance_moves_forward() {
        let mut s = stream("SELECT 1");
        let a = s.advance().kind.clone();
        let b = s.current().kind.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn mark_and_reset_rewind_the_cursor() {
        let mut s = stream("SELECT 1 FROM t");
        s.advance();
        let mark = s.mark();
        s.advance();
        s.advance();
        s.reset(mark);
        assert_eq!(s.mark(), mark);
    }

    #[test]
    fn advancing_past_eof_stays_at_eof() {
        let mut s = stream("1");
        s.advance();
        assert!(s.at_eof());
        s.advance();
        s.advance();
        assert!(s.at_eof());
    }

    #[test]
    fn peek_beyond_end_saturates_at_eof() {
        let s = stream("1");
        assert!(s.peek(50).is_eof());
    }

    #[test]
    fn previous_is_the_last_consumed_token() {
        let mut s = stream("SELECT 1");
        let consumed = s.advance().kind.clone();
        assert_eq!(s.previous().kind, consumed);
    }
}
