//! The parser driver: token-stream plumbing, the top-level statement
//! loop, and panic-mode synchronization. Per-construct grammars live in
//! the sibling `expr`, `select`, `dml`, `ddl`, and `misc` modules, each
//! contributing its own `impl<'a> Parser<'a>` block.

use tracing::{debug, warn};

use crate::ast::Statement;
use crate::diagnostic::{Diagnostic, StructuralError, SyntaxError};
use crate::keyword::Keyword;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::span::Span;
use crate::token_stream::TokenStream;

/// Keywords that mark a top-level statement boundary during error
/// recovery.
const SYNC_KEYWORDS: &[Keyword] = &[
    Keyword::Select,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Delete,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
    Keyword::Begin,
    Keyword::Commit,
    Keyword::End,
    Keyword::Rollback,
    Keyword::Savepoint,
    Keyword::Release,
    Keyword::Attach,
    Keyword::Detach,
    Keyword::Analyze,
    Keyword::Vacuum,
    Keyword::Reindex,
    Keyword::Explain,
    Keyword::Pragma,
    Keyword::With,
    Keyword::Replace,
];

/// Recursive-descent / precedence-climbing parser over a pre-lexed
/// token stream.
pub struct Parser<'a> {
    pub(super) tokens: TokenStream,
    pub(super) source: &'a str,
    pub(super) diagnostics: Vec<Diagnostic>,
}

/// Parses `source` into statements plus any diagnostics raised along
/// the way. Never panics on malformed input.
#[must_use]
pub fn parse(source: &str) -> (Vec<Statement>, Vec<Diagnostic>) {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(source, tokens).parse_program()
}

impl<'a> Parser<'a> {
    /// Builds a parser over an already-lexed token vector.
    #[must_use]
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Runs the top-level statement loop and returns everything parsed.
    pub fn parse_program(mut self) -> (Vec<Statement>, Vec<Diagnostic>) {
        let mut statements = Vec::new();

        while self.eat_kind(&TokenKind::Semicolon) {}

        while !self.tokens.at_eof() {
            match self.parse_statement() {
                Ok(stmt) => {
                    debug!(kind = ?std::mem::discriminant(&stmt), span = ?stmt.span(), "parsed statement");
                    statements.push(stmt);
                }
                Err(err) => {
                    warn!(span = ?err.span(), "syntax error, synchronizing");
                    self.diagnostics.push(err.into());
                    self.synchronize();
                }
            }
            while self.eat_kind(&TokenKind::Semicolon) {}
        }

        (statements, self.diagnostics)
    }

    /// Dispatches on the leading keyword to the right statement parser.
    /// `WITH` is folded into whichever DML statement follows it;
    /// `EXPLAIN [QUERY PLAN]` wraps any other statement.
    pub(super) fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.current().as_keyword() {
            Some(Keyword::Explain) => self.parse_explain(),
            Some(Keyword::With) => self.parse_with_prefixed_statement(),
            Some(Keyword::Select) | Some(Keyword::Values) => {
                self.parse_select_statement(None).map(Statement::Select)
            }
            Some(Keyword::Insert) | Some(Keyword::Replace) => {
                self.parse_insert(None).map(Statement::Insert)
            }
            Some(Keyword::Update) => self.parse_update(None).map(Statement::Update),
            Some(Keyword::Delete) => self.parse_delete(None).map(Statement::Delete),
            Some(Keyword::Create) => self.parse_create(),
            Some(Keyword::Alter) => self.parse_alter_table(),
            Some(Keyword::Drop) => self.parse_drop(),
            Some(Keyword::Begin) => self.parse_begin(),
            Some(Keyword::Commit) | Some(Keyword::End) => self.parse_commit(),
            Some(Keyword::Rollback) => self.parse_rollback(),
            Some(Keyword::Savepoint) => self.parse_savepoint(),
            Some(Keyword::Release) => self.parse_release(),
            Some(Keyword::Attach) => self.parse_attach(),
            Some(Keyword::Detach) => self.parse_detach(),
            Some(Keyword::Analyze) => self.parse_analyze(),
            Some(Keyword::Vacuum) => self.parse_vacuum(),
            Some(Keyword::Reindex) => self.parse_reindex(),
            Some(Keyword::Pragma) => self.parse_pragma(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// Folds a `WITH` prefix into whichever statement follows its CTE
    /// list; only `SELECT`/`INSERT`/`UPDATE`/`DELETE` accept one.
    fn parse_with_prefixed_statement(&mut self) -> Result<Statement, SyntaxError> {
        let with = self.parse_with()?;
        match self.current().as_keyword() {
            Some(Keyword::Select) | Some(Keyword::Values) => {
                self.parse_select_statement(Some(with)).map(Statement::Select)
            }
            Some(Keyword::Insert) | Some(Keyword::Replace) => {
                self.parse_insert(Some(with)).map(Statement::Insert)
            }
            Some(Keyword::Update) => self.parse_update(Some(with)).map(Statement::Update),
            Some(Keyword::Delete) => self.parse_delete(Some(with)).map(Statement::Delete),
            _ => Err(self.unexpected("SELECT, INSERT, UPDATE, or DELETE after WITH")),
        }
    }

    fn parse_explain(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.advance(); // EXPLAIN
        let query_plan = if self.at_keyword(Keyword::Query) {
            self.advance();
            self.expect_keyword(Keyword::Plan)?;
            true
        } else {
            false
        };
        let inner = self.parse_statement()?;
        let span = start.merge(inner.span());
        Ok(Statement::Explain {
            query_plan,
            statement: Box::new(inner),
            span,
        })
    }

    /// Discards tokens until the next statement boundary: a `;` at
    /// nesting depth zero, a synchronization keyword at depth zero, or
    /// `EOF`. Always consumes at least one token so recovery can't loop
    /// forever on the same failure.
    fn synchronize(&mut self) {
        let mut depth: i32 = 0;
        self.advance();
        loop {
            let tok = self.current();
            if tok.is_eof() {
                return;
            }
            match &tok.kind {
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                TokenKind::Keyword(kw) if depth == 0 && SYNC_KEYWORDS.contains(kw) => return,
                _ => {}
            }
            self.advance();
        }
    }

    // --- token-stream helpers shared by every grammar module ---

    pub(super) fn current(&self) -> &Token {
        self.tokens.current()
    }

    pub(super) fn peek_kind(&self, n: usize) -> &TokenKind {
        &self.tokens.peek(n).kind
    }

    pub(super) fn advance(&mut self) -> Token {
        self.tokens.advance().clone()
    }

    /// The last token consumed by `advance`/`expect_*`/`eat_*`. Used to
    /// compute a construct's span end without bleeding into the next,
    /// not-yet-consumed token.
    pub(super) fn previous(&self) -> &Token {
        self.tokens.previous()
    }

    pub(super) fn mark(&self) -> usize {
        self.tokens.mark()
    }

    pub(super) fn reset(&mut self, mark: usize) {
        self.tokens.reset(mark);
    }

    pub(super) fn at_keyword(&self, kw: Keyword) -> bool {
        self.current().as_keyword() == Some(kw)
    }

    pub(super) fn at_keyword_at(&self, n: usize, kw: Keyword) -> bool {
        self.tokens.peek(n).as_keyword() == Some(kw)
    }

    pub(super) fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.at_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_kind(&mut self, kind: &TokenKind) -> bool {
        if self.current().kind == *kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn expect_keyword(&mut self, kw: Keyword) -> Result<Token, SyntaxError> {
        if self.at_keyword(kw) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kw.as_str()))
        }
    }

    pub(super) fn expect_kind(&mut self, kind: &TokenKind) -> Result<Token, SyntaxError> {
        if self.current().kind == *kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Consumes an identifier token (bare or quoted) and returns its
    /// text. Unquoted keywords from [`Keyword::is_bare_word_friendly`]
    /// are also accepted here, matching SQLite's non-reserved-keyword
    /// behavior.
    pub(super) fn expect_ident(&mut self) -> Result<String, SyntaxError> {
        match &self.current().kind {
            TokenKind::Ident(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            TokenKind::Keyword(kw) if kw.is_bare_word_friendly() => {
                let s = kw.as_str().to_string();
                self.advance();
                Ok(s)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Parses `[schema.]name`, returning `(schema, name)`.
    pub(super) fn parse_qualified_name(&mut self) -> Result<(Option<String>, String), SyntaxError> {
        let first = self.expect_ident()?;
        if self.eat_kind(&TokenKind::Dot) {
            let second = self.expect_ident()?;
            Ok((Some(first), second))
        } else {
            Ok((None, first))
        }
    }

    pub(super) fn unexpected(&self, expected: &str) -> SyntaxError {
        let tok = self.current();
        if let TokenKind::Error(lex_err) = &tok.kind {
            return lex_err.clone().into();
        }
        if tok.is_eof() {
            SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
                span: tok.span,
            }
        } else {
            SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: tok.kind.describe(),
                span: tok.span,
            }
        }
    }

    pub(super) fn structural_error(&self, detail: impl Into<String>, span: Span) -> SyntaxError {
        StructuralError::Violation {
            detail: detail.into(),
            span,
        }
        .into()
    }
}
