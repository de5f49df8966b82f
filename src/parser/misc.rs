//! Transaction control (`BEGIN`/`COMMIT`/`ROLLBACK`/`SAVEPOINT`/
//! `RELEASE`) and database-management statements (`ATTACH`/`DETACH`/
//! `ANALYZE`/`VACUUM`/`REINDEX`/`PRAGMA`).

use crate::ast::{
    AttachStatement, BeginStatement, PragmaStatement, PragmaValue, QualifiedName,
    RollbackStatement, Statement, TransactionMode,
};
use crate::diagnostic::SyntaxError;
use crate::keyword::Keyword;
use crate::lexer::TokenKind;

use super::core::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_begin(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Begin)?;
        let mode = if self.eat_keyword(Keyword::Deferred) {
            Some(TransactionMode::Deferred)
        } else if self.eat_keyword(Keyword::Immediate) {
            Some(TransactionMode::Immediate)
        } else if self.eat_keyword(Keyword::Exclusive) {
            Some(TransactionMode::Exclusive)
        } else {
            None
        };
        self.eat_keyword(Keyword::Transaction);
        let span = start.merge(self.previous().span);
        Ok(Statement::Begin(BeginStatement { mode, span }))
    }

    pub(super) fn parse_commit(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        if !self.eat_keyword(Keyword::Commit) {
            self.expect_keyword(Keyword::End)?;
        }
        self.eat_keyword(Keyword::Transaction);
        let span = start.merge(self.previous().span);
        Ok(Statement::Commit(span))
    }

    pub(super) fn parse_rollback(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Rollback)?;
        self.eat_keyword(Keyword::Transaction);
        let to_savepoint = if self.eat_keyword(Keyword::To) {
            self.eat_keyword(Keyword::Savepoint);
            Some(self.expect_ident()?)
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::Rollback(RollbackStatement {
            to_savepoint,
            span,
        }))
    }

    pub(super) fn parse_savepoint(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Savepoint)?;
        let name = self.expect_ident()?;
        let span = start.merge(self.previous().span);
        Ok(Statement::Savepoint(name, span))
    }

    pub(super) fn parse_release(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Release)?;
        self.eat_keyword(Keyword::Savepoint);
        let name = self.expect_ident()?;
        let span = start.merge(self.previous().span);
        Ok(Statement::Release(name, span))
    }

    pub(super) fn parse_attach(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Attach)?;
        self.eat_keyword(Keyword::Database);
        let file = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let name = self.expect_ident()?;
        let span = start.merge(self.previous().span);
        Ok(Statement::Attach(AttachStatement { file, name, span }))
    }

    pub(super) fn parse_detach(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Detach)?;
        self.eat_keyword(Keyword::Database);
        let (schema, name) = self.parse_qualified_name()?;
        let span = start.merge(self.previous().span);
        Ok(Statement::Detach(QualifiedName { schema, name }, span))
    }

    pub(super) fn parse_analyze(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Analyze)?;
        let target = if self.at_name_start() {
            let (schema, name) = self.parse_qualified_name()?;
            Some(QualifiedName { schema, name })
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::Analyze(target, span))
    }

    pub(super) fn parse_vacuum(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Vacuum)?;
        let schema = if self.at_name_start() {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let into = if self.eat_keyword(Keyword::Into) {
            Some(self.expect_string_literal()?)
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::Vacuum {
            schema,
            into,
            span,
        })
    }

    pub(super) fn parse_reindex(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Reindex)?;
        let target = if self.at_name_start() {
            let (schema, name) = self.parse_qualified_name()?;
            Some(QualifiedName { schema, name })
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::Reindex(target, span))
    }

    pub(super) fn parse_pragma(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Pragma)?;
        let (schema, name) = self.parse_qualified_name()?;
        let value = if self.eat_kind(&TokenKind::Eq) {
            Some(PragmaValue::Equals(self.parse_expr()?))
        } else if self.current().kind == TokenKind::LParen {
            self.advance();
            let expr = self.parse_expr()?;
            self.expect_kind(&TokenKind::RParen)?;
            Some(PragmaValue::Call(expr))
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::Pragma(PragmaStatement {
            schema,
            name,
            value,
            span,
        }))
    }

    /// True when the current token can start a bare or quoted
    /// identifier, used by the optional schema-name arguments of
    /// `ANALYZE`/`VACUUM`/`REINDEX`.
    fn at_name_start(&self) -> bool {
        match &self.current().kind {
            TokenKind::Ident(_) => true,
            TokenKind::Keyword(kw) => kw.is_bare_word_friendly(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{PragmaValue, Statement, TransactionMode};
    use crate::parser::parse;

    fn parse_one(source: &str) -> Statement {
        let (statements, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
        assert_eq!(statements.len(), 1);
        statements.into_iter().next().unwrap()
    }

    #[test]
    fn begin_immediate_transaction() {
        let stmt = parse_one("BEGIN IMMEDIATE TRANSACTION;");
        assert!(matches!(
            stmt,
            Statement::Begin(b) if b.mode == Some(TransactionMode::Immediate)
        ));
    }

    #[test]
    fn end_is_an_alias_for_commit() {
        let stmt = parse_one("END;");
        assert!(matches!(stmt, Statement::Commit(_)));
    }

    #[test]
    fn rollback_to_savepoint() {
        let stmt = parse_one("ROLLBACK TO SAVEPOINT sp1;");
        let Statement::Rollback(rollback) = stmt else {
            panic!("expected Rollback");
        };
        assert_eq!(rollback.to_savepoint.as_deref(), Some("sp1"));
    }

    #[test]
    fn attach_and_detach() {
        let stmt = parse_one("ATTACH DATABASE 'other.db' AS other;");
        assert!(matches!(stmt, Statement::Attach(_)));
        let stmt = parse_one("DETACH other;");
        assert!(matches!(stmt, Statement::Detach(name, _) if name.name == "other"));
    }

    #[test]
    fn pragma_equals_and_call_forms() {
        let stmt = parse_one("PRAGMA foreign_keys = 1;");
        let Statement::Pragma(pragma) = stmt else {
            panic!("expected Pragma");
        };
        assert!(matches!(pragma.value, Some(PragmaValue::Equals(_))));

        let stmt = parse_one("PRAGMA table_info(t);");
        let Statement::Pragma(pragma) = stmt else {
            panic!("expected Pragma");
        };
        assert!(matches!(pragma.value, Some(PragmaValue::Call(_))));
    }

    #[test]
    fn vacuum_into_file() {
        let stmt = parse_one("VACUUM INTO 'backup.db';");
        assert!(matches!(
            stmt,
            Statement::Vacuum { into: Some(f), .. } if f == "backup.db"
        ));
    }

    #[test]
    fn analyze_and_reindex_without_target() {
        let stmt = parse_one("ANALYZE;");
        assert!(matches!(stmt, Statement::Analyze(None, _)));
        let stmt = parse_one("REINDEX;");
        assert!(matches!(stmt, Statement::Reindex(None, _)));
    }
}
