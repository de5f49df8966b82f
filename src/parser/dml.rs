//! `INSERT`/`UPDATE`/`DELETE` and the `ON CONFLICT` upsert clause they
//! share with `CREATE TABLE`'s conflict-resolution syntax.

use crate::ast::{
    Assignment, ConflictAction, DeleteStatement, FromClause, InsertSource, InsertStatement,
    UpdateStatement, UpsertAction, UpsertClause, UpsertTarget, With,
};
use crate::diagnostic::SyntaxError;
use crate::keyword::Keyword;
use crate::lexer::TokenKind;

use super::core::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_insert(
        &mut self,
        with: Option<With>,
    ) -> Result<InsertStatement, SyntaxError> {
        let start = self.current().span;
        let with = match with {
            Some(w) => Some(w),
            None if self.at_keyword(Keyword::With) => Some(self.parse_with()?),
            None => None,
        };

        let or_action = if self.eat_keyword(Keyword::Replace) {
            Some(ConflictAction::Replace)
        } else {
            self.expect_keyword(Keyword::Insert)?;
            if self.eat_keyword(Keyword::Or) {
                Some(self.parse_conflict_action()?)
            } else {
                None
            }
        };
        self.expect_keyword(Keyword::Into)?;
        let (schema, table) = self.parse_qualified_name()?;
        let alias = if self.eat_keyword(Keyword::As) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let columns = if self.eat_kind(&TokenKind::LParen) {
            let mut cols = vec![self.expect_ident()?];
            while self.eat_kind(&TokenKind::Comma) {
                cols.push(self.expect_ident()?);
            }
            self.expect_kind(&TokenKind::RParen)?;
            cols
        } else {
            Vec::new()
        };

        let source = if self.eat_keyword(Keyword::Default) {
            self.expect_keyword(Keyword::Values)?;
            InsertSource::DefaultValues
        } else if self.at_keyword(Keyword::Values) {
            self.advance();
            InsertSource::Values(self.parse_values_rows()?)
        } else {
            InsertSource::Select(Box::new(self.parse_select_statement(None)?))
        };

        let mut upserts = Vec::new();
        while self.at_keyword(Keyword::On) {
            upserts.push(self.parse_upsert_clause()?);
        }
        let returning = if self.at_keyword(Keyword::Returning) {
            Some(self.parse_returning()?)
        } else {
            None
        };

        let span = start.merge(self.previous().span);
        Ok(InsertStatement {
            with,
            or_action,
            schema,
            table,
            alias,
            columns,
            source,
            upserts,
            returning,
            span,
        })
    }

    pub(super) fn parse_update(
        &mut self,
        with: Option<With>,
    ) -> Result<UpdateStatement, SyntaxError> {
        let start = self.current().span;
        let with = match with {
            Some(w) => Some(w),
            None if self.at_keyword(Keyword::With) => Some(self.parse_with()?),
            None => None,
        };
        self.expect_keyword(Keyword::Update)?;
        let or_action = if self.eat_keyword(Keyword::Or) {
            Some(self.parse_conflict_action()?)
        } else {
            None
        };
        let table = self.parse_qualified_table_name()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_assignment_list()?;
        let from = if self.eat_keyword(Keyword::From) {
            Some(FromClause {
                root: self.parse_join_tree()?,
            })
        } else {
            None
        };
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.at_keyword(Keyword::Returning) {
            Some(self.parse_returning()?)
        } else {
            None
        };
        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_ordering_term_list()?
        } else {
            Vec::new()
        };
        let limit = if self.eat_keyword(Keyword::Limit) {
            Some(self.parse_limit()?)
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(UpdateStatement {
            with,
            or_action,
            table,
            assignments,
            from,
            where_clause,
            returning,
            order_by,
            limit,
            span,
        })
    }

    pub(super) fn parse_delete(
        &mut self,
        with: Option<With>,
    ) -> Result<DeleteStatement, SyntaxError> {
        let start = self.current().span;
        let with = match with {
            Some(w) => Some(w),
            None if self.at_keyword(Keyword::With) => Some(self.parse_with()?),
            None => None,
        };
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_qualified_table_name()?;
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.at_keyword(Keyword::Returning) {
            Some(self.parse_returning()?)
        } else {
            None
        };
        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_ordering_term_list()?
        } else {
            Vec::new()
        };
        let limit = if self.eat_keyword(Keyword::Limit) {
            Some(self.parse_limit()?)
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(DeleteStatement {
            with,
            table,
            where_clause,
            returning,
            order_by,
            limit,
            span,
        })
    }

    fn parse_upsert_clause(&mut self) -> Result<UpsertClause, SyntaxError> {
        self.expect_keyword(Keyword::On)?;
        self.expect_keyword(Keyword::Conflict)?;
        let target = if self.current().kind == TokenKind::LParen {
            let columns = self.parse_indexed_column_list()?;
            let where_clause = if self.eat_keyword(Keyword::Where) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            Some(UpsertTarget {
                columns,
                where_clause,
            })
        } else {
            None
        };
        self.expect_keyword(Keyword::Do)?;
        let action = if self.eat_keyword(Keyword::Nothing) {
            UpsertAction::Nothing
        } else {
            self.expect_keyword(Keyword::Update)?;
            self.expect_keyword(Keyword::Set)?;
            let assignments = self.parse_assignment_list()?;
            let where_clause = if self.eat_keyword(Keyword::Where) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            UpsertAction::Update {
                assignments,
                where_clause,
            }
        };
        Ok(UpsertClause { target, action })
    }

    fn parse_assignment_list(&mut self) -> Result<Vec<Assignment>, SyntaxError> {
        let mut items = vec![self.parse_assignment()?];
        while self.eat_kind(&TokenKind::Comma) {
            items.push(self.parse_assignment()?);
        }
        Ok(items)
    }

    fn parse_assignment(&mut self) -> Result<Assignment, SyntaxError> {
        let columns = if self.eat_kind(&TokenKind::LParen) {
            let mut cols = vec![self.expect_ident()?];
            while self.eat_kind(&TokenKind::Comma) {
                cols.push(self.expect_ident()?);
            }
            self.expect_kind(&TokenKind::RParen)?;
            cols
        } else {
            vec![self.expect_ident()?]
        };
        self.expect_kind(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { columns, value })
    }
}
