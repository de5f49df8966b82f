//! `SELECT`/`VALUES`, `WITH`, the `FROM` join tree, windows, and the
//! ordering/limit/returning clauses every DML statement shares.

use crate::ast::{
    CompoundOp, Cte, Distinctness, FrameExclude, FrameSpec, FrameUnit, FromClause, Indexed,
    IndexedColumn, JoinConstraint, JoinKind, Limit, NullsOrder, OrderDirection, OrderingTerm,
    QualifiedTableName, ReturningClause, SelectColumn, SelectCore, SelectStatement, TableExpr,
    WindowDef, WindowFrameBound, With,
};
use crate::diagnostic::SyntaxError;
use crate::keyword::Keyword;
use crate::lexer::TokenKind;

use super::core::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_with(&mut self) -> Result<With, SyntaxError> {
        self.expect_keyword(Keyword::With)?;
        let recursive = self.eat_keyword(Keyword::Recursive);
        let mut ctes = vec![self.parse_cte()?];
        while self.eat_kind(&TokenKind::Comma) {
            ctes.push(self.parse_cte()?);
        }
        Ok(With { recursive, ctes })
    }

    fn parse_cte(&mut self) -> Result<Cte, SyntaxError> {
        let name = self.expect_ident()?;
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
        let materialized = if self.eat_keyword(Keyword::Not) {
            self.expect_keyword(Keyword::Materialized)?;
            Some(false)
        } else if self.eat_keyword(Keyword::Materialized) {
            Some(true)
        } else {
            None
        };
        self.expect_keyword(Keyword::As)?;
        self.expect_kind(&TokenKind::LParen)?;
        let query = self.parse_select_statement(None)?;
        self.expect_kind(&TokenKind::RParen)?;
        Ok(Cte {
            name,
            columns,
            materialized,
            query: Box::new(query),
        })
    }

    pub(super) fn parse_select_statement(
        &mut self,
        with: Option<With>,
    ) -> Result<SelectStatement, SyntaxError> {
        let start = self.current().span;
        let with = match with {
            Some(w) => Some(w),
            None if self.at_keyword(Keyword::With) => Some(self.parse_with()?),
            None => None,
        };

        let first = self.parse_select_core()?;
        let mut compounds = Vec::new();
        while let Some(op) = self.try_parse_compound_op() {
            let core = self.parse_select_core()?;
            compounds.push((op, core));
        }

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
        Ok(SelectStatement {
            with,
            first,
            compounds,
            order_by,
            limit,
            span,
        })
    }

    fn try_parse_compound_op(&mut self) -> Option<CompoundOp> {
        if self.at_keyword(Keyword::Union) {
            self.advance();
            if self.eat_keyword(Keyword::All) {
                Some(CompoundOp::UnionAll)
            } else {
                Some(CompoundOp::Union)
            }
        } else if self.at_keyword(Keyword::Intersect) {
            self.advance();
            Some(CompoundOp::Intersect)
        } else if self.at_keyword(Keyword::Except) {
            self.advance();
            Some(CompoundOp::Except)
        } else {
            None
        }
    }

    fn parse_select_core(&mut self) -> Result<SelectCore, SyntaxError> {
        let start = self.current().span;
        if self.at_keyword(Keyword::Values) {
            self.advance();
            let rows = self.parse_values_rows()?;
            let span = start.merge(self.previous().span);
            return Ok(SelectCore::Values(rows, span));
        }

        self.expect_keyword(Keyword::Select)?;
        let distinctness = if self.eat_keyword(Keyword::Distinct) {
            Distinctness::Distinct
        } else {
            self.eat_keyword(Keyword::All);
            Distinctness::All
        };
        let columns = self.parse_select_column_list()?;
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
        let mut group_by = Vec::new();
        let mut having = None;
        if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            group_by.push(self.parse_expr()?);
            while self.eat_kind(&TokenKind::Comma) {
                group_by.push(self.parse_expr()?);
            }
            if self.eat_keyword(Keyword::Having) {
                having = Some(self.parse_expr()?);
            }
        }
        let mut windows = Vec::new();
        if self.eat_keyword(Keyword::Window) {
            loop {
                let name = self.expect_ident()?;
                self.expect_keyword(Keyword::As)?;
                let def = self.parse_window_def()?;
                windows.push((name, def));
                if !self.eat_kind(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let span = start.merge(self.previous().span);
        Ok(SelectCore::Select {
            distinctness,
            columns,
            from,
            where_clause,
            group_by,
            having,
            windows,
            span,
        })
    }

    pub(super) fn parse_values_rows(&mut self) -> Result<Vec<Vec<crate::ast::Expr>>, SyntaxError> {
        let mut rows = vec![self.parse_values_row()?];
        while self.eat_kind(&TokenKind::Comma) {
            rows.push(self.parse_values_row()?);
        }
        Ok(rows)
    }

    fn parse_values_row(&mut self) -> Result<Vec<crate::ast::Expr>, SyntaxError> {
        self.expect_kind(&TokenKind::LParen)?;
        let mut items = vec![self.parse_expr()?];
        while self.eat_kind(&TokenKind::Comma) {
            items.push(self.parse_expr()?);
        }
        self.expect_kind(&TokenKind::RParen)?;
        Ok(items)
    }

    pub(super) fn parse_select_column_list(&mut self) -> Result<Vec<SelectColumn>, SyntaxError> {
        let mut items = vec![self.parse_select_column()?];
        while self.eat_kind(&TokenKind::Comma) {
            items.push(self.parse_select_column()?);
        }
        Ok(items)
    }

    fn parse_select_column(&mut self) -> Result<SelectColumn, SyntaxError> {
        if self.current().kind == TokenKind::Star {
            self.advance();
            return Ok(SelectColumn::Wildcard);
        }
        if matches!(self.current().kind, TokenKind::Ident(_))
            && self.peek_kind(1) == &TokenKind::Dot
            && self.peek_kind(2) == &TokenKind::Star
        {
            let name = self.expect_ident()?;
            self.advance(); // '.'
            self.advance(); // '*'
            return Ok(SelectColumn::TableWildcard(name));
        }
        let expr = self.parse_expr()?;
        let alias = self.parse_optional_alias()?;
        Ok(SelectColumn::Expr { expr, alias })
    }

    /// An alias is either explicit (`AS name`) or bare (`name`
    /// immediately following, with no `AS`). Only a plain identifier
    /// token can start a bare alias, so this never misreads the next
    /// clause's leading keyword as one.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, SyntaxError> {
        if self.eat_keyword(Keyword::As) {
            return Ok(Some(self.expect_ident()?));
        }
        if matches!(self.current().kind, TokenKind::Ident(_)) {
            return Ok(Some(self.expect_ident()?));
        }
        Ok(None)
    }

    pub(super) fn parse_join_tree(&mut self) -> Result<TableExpr, SyntaxError> {
        let mut left = self.parse_table_primary()?;
        loop {
            let (natural, kind) = if self.eat_kind(&TokenKind::Comma) {
                (false, JoinKind::Comma)
            } else {
                let natural = self.eat_keyword(Keyword::Natural);
                let kind = if self.eat_keyword(Keyword::Cross) {
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Cross
                } else if self.eat_keyword(Keyword::Inner) {
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Inner
                } else if self.eat_keyword(Keyword::Left) {
                    self.eat_keyword(Keyword::Outer);
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Left
                } else if self.eat_keyword(Keyword::Right) {
                    self.eat_keyword(Keyword::Outer);
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Right
                } else if self.eat_keyword(Keyword::Full) {
                    self.eat_keyword(Keyword::Outer);
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Full
                } else if self.eat_keyword(Keyword::Join) {
                    JoinKind::Inner
                } else {
                    if natural {
                        return Err(self.unexpected("JOIN"));
                    }
                    break;
                };
                (natural, kind)
            };

            let right = self.parse_table_primary()?;
            let constraint = if self.eat_keyword(Keyword::On) {
                Some(JoinConstraint::On(self.parse_expr()?))
            } else if self.eat_keyword(Keyword::Using) {
                self.expect_kind(&TokenKind::LParen)?;
                let mut cols = vec![self.expect_ident()?];
                while self.eat_kind(&TokenKind::Comma) {
                    cols.push(self.expect_ident()?);
                }
                self.expect_kind(&TokenKind::RParen)?;
                Some(JoinConstraint::Using(cols))
            } else {
                None
            };

            left = TableExpr::Join {
                left: Box::new(left),
                natural,
                kind,
                right: Box::new(right),
                constraint,
            };
        }
        Ok(left)
    }

    fn parse_table_primary(&mut self) -> Result<TableExpr, SyntaxError> {
        if self.current().kind == TokenKind::LParen {
            self.advance();
            if self.at_keyword(Keyword::Select)
                || self.at_keyword(Keyword::Values)
                || self.at_keyword(Keyword::With)
            {
                let select = self.parse_select_statement(None)?;
                self.expect_kind(&TokenKind::RParen)?;
                let alias = self.parse_optional_alias()?;
                return Ok(TableExpr::Subquery {
                    select: Box::new(select),
                    alias,
                });
            }
            let inner = self.parse_join_tree()?;
            self.expect_kind(&TokenKind::RParen)?;
            return Ok(TableExpr::Nested(Box::new(inner)));
        }

        let (schema, name) = self.parse_qualified_name()?;
        if self.current().kind == TokenKind::LParen {
            self.advance();
            let mut args = Vec::new();
            if self.current().kind != TokenKind::RParen {
                args.push(self.parse_expr()?);
                while self.eat_kind(&TokenKind::Comma) {
                    args.push(self.parse_expr()?);
                }
            }
            self.expect_kind(&TokenKind::RParen)?;
            let alias = self.parse_optional_alias()?;
            return Ok(TableExpr::TableFunction {
                schema,
                name,
                args,
                alias,
            });
        }

        let alias = self.parse_optional_alias()?;
        let indexed = if self.eat_keyword(Keyword::Indexed) {
            self.expect_keyword(Keyword::By)?;
            Indexed::IndexedBy(self.expect_ident()?)
        } else if self.eat_keyword(Keyword::Not) {
            self.expect_keyword(Keyword::Indexed)?;
            Indexed::NotIndexed
        } else {
            Indexed::None
        };
        Ok(TableExpr::Table(QualifiedTableName {
            schema,
            name,
            alias,
            indexed,
        }))
    }

    pub(super) fn parse_qualified_table_name(&mut self) -> Result<QualifiedTableName, SyntaxError> {
        let (schema, name) = self.parse_qualified_name()?;
        let alias = self.parse_optional_alias()?;
        let indexed = if self.eat_keyword(Keyword::Indexed) {
            self.expect_keyword(Keyword::By)?;
            Indexed::IndexedBy(self.expect_ident()?)
        } else if self.eat_keyword(Keyword::Not) {
            self.expect_keyword(Keyword::Indexed)?;
            Indexed::NotIndexed
        } else {
            Indexed::None
        };
        Ok(QualifiedTableName {
            schema,
            name,
            alias,
            indexed,
        })
    }

    pub(super) fn parse_ordering_term_list(&mut self) -> Result<Vec<OrderingTerm>, SyntaxError> {
        let mut items = vec![self.parse_ordering_term()?];
        while self.eat_kind(&TokenKind::Comma) {
            items.push(self.parse_ordering_term()?);
        }
        Ok(items)
    }

    fn parse_ordering_term(&mut self) -> Result<OrderingTerm, SyntaxError> {
        let expr = self.parse_expr()?;
        let collate = if self.eat_keyword(Keyword::Collate) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let direction = if self.eat_keyword(Keyword::Asc) {
            OrderDirection::Asc
        } else if self.eat_keyword(Keyword::Desc) {
            OrderDirection::Desc
        } else {
            OrderDirection::Unspecified
        };
        let nulls = if self.eat_keyword(Keyword::Nulls) {
            if self.eat_keyword(Keyword::First) {
                Some(NullsOrder::First)
            } else {
                self.expect_keyword(Keyword::Last)?;
                Some(NullsOrder::Last)
            }
        } else {
            None
        };
        Ok(OrderingTerm {
            expr,
            collate,
            direction,
            nulls,
        })
    }

    pub(super) fn parse_indexed_column_list(&mut self) -> Result<Vec<IndexedColumn>, SyntaxError> {
        self.expect_kind(&TokenKind::LParen)?;
        let mut items = vec![self.parse_indexed_column()?];
        while self.eat_kind(&TokenKind::Comma) {
            items.push(self.parse_indexed_column()?);
        }
        self.expect_kind(&TokenKind::RParen)?;
        Ok(items)
    }

    fn parse_indexed_column(&mut self) -> Result<IndexedColumn, SyntaxError> {
        let expr = self.parse_expr()?;
        let collate = if self.eat_keyword(Keyword::Collate) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let direction = if self.eat_keyword(Keyword::Asc) {
            OrderDirection::Asc
        } else if self.eat_keyword(Keyword::Desc) {
            OrderDirection::Desc
        } else {
            OrderDirection::Unspecified
        };
        Ok(IndexedColumn {
            expr,
            collate,
            direction,
        })
    }

    pub(super) fn parse_limit(&mut self) -> Result<Limit, SyntaxError> {
        let limit = self.parse_expr()?;
        let offset = if self.eat_keyword(Keyword::Offset) {
            Some(self.parse_expr()?)
        } else if self.eat_kind(&TokenKind::Comma) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Limit { limit, offset })
    }

    pub(super) fn parse_returning(&mut self) -> Result<ReturningClause, SyntaxError> {
        self.expect_keyword(Keyword::Returning)?;
        Ok(ReturningClause {
            columns: self.parse_select_column_list()?,
        })
    }

    pub(super) fn parse_window_def(&mut self) -> Result<WindowDef, SyntaxError> {
        self.expect_kind(&TokenKind::LParen)?;
        let def = self.parse_window_def_body()?;
        self.expect_kind(&TokenKind::RParen)?;
        Ok(def)
    }

    fn parse_window_def_body(&mut self) -> Result<WindowDef, SyntaxError> {
        let base = if matches!(self.current().kind, TokenKind::Ident(_)) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let partition_by = if self.eat_keyword(Keyword::Partition) {
            self.expect_keyword(Keyword::By)?;
            let mut exprs = vec![self.parse_expr()?];
            while self.eat_kind(&TokenKind::Comma) {
                exprs.push(self.parse_expr()?);
            }
            exprs
        } else {
            Vec::new()
        };
        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_ordering_term_list()?
        } else {
            Vec::new()
        };
        let frame = if self.at_keyword(Keyword::Rows)
            || self.at_keyword(Keyword::Range)
            || self.at_keyword(Keyword::Groups)
        {
            Some(self.parse_frame_spec()?)
        } else {
            None
        };
        Ok(WindowDef {
            base,
            partition_by,
            order_by,
            frame,
        })
    }

    fn parse_frame_spec(&mut self) -> Result<FrameSpec, SyntaxError> {
        let unit_span = self.current().span;
        let unit = if self.eat_keyword(Keyword::Rows) {
            FrameUnit::Rows
        } else if self.eat_keyword(Keyword::Range) {
            FrameUnit::Range
        } else {
            self.expect_keyword(Keyword::Groups)?;
            FrameUnit::Groups
        };

        let (start, end) = if self.eat_keyword(Keyword::Between) {
            let start = self.parse_frame_bound()?;
            self.expect_keyword(Keyword::And)?;
            let end = self.parse_frame_bound()?;
            (start, Some(end))
        } else {
            (self.parse_frame_bound()?, None)
        };

        if matches!(start, WindowFrameBound::UnboundedFollowing) {
            return Err(self.structural_error(
                "UNBOUNDED FOLLOWING is not a valid frame start",
                unit_span,
            ));
        }
        if matches!(end, Some(WindowFrameBound::UnboundedPreceding)) {
            return Err(self.structural_error(
                "UNBOUNDED PRECEDING is not a valid frame end",
                unit_span,
            ));
        }

        let exclude = if self.eat_keyword(Keyword::Exclude) {
            if self.eat_keyword(Keyword::No) {
                self.expect_keyword(Keyword::Others)?;
                Some(FrameExclude::NoOthers)
            } else if self.eat_keyword(Keyword::Current) {
                self.expect_keyword(Keyword::Row)?;
                Some(FrameExclude::CurrentRow)
            } else if self.eat_keyword(Keyword::Group) {
                Some(FrameExclude::Group)
            } else {
                self.expect_keyword(Keyword::Ties)?;
                Some(FrameExclude::Ties)
            }
        } else {
            None
        };

        Ok(FrameSpec {
            unit,
            start,
            end,
            exclude,
        })
    }

    fn parse_frame_bound(&mut self) -> Result<WindowFrameBound, SyntaxError> {
        if self.eat_keyword(Keyword::Unbounded) {
            return if self.eat_keyword(Keyword::Preceding) {
                Ok(WindowFrameBound::UnboundedPreceding)
            } else {
                self.expect_keyword(Keyword::Following)?;
                Ok(WindowFrameBound::UnboundedFollowing)
            };
        }
        if self.eat_keyword(Keyword::Current) {
            self.expect_keyword(Keyword::Row)?;
            return Ok(WindowFrameBound::CurrentRow);
        }
        let expr = self.parse_relational()?;
        if self.eat_keyword(Keyword::Preceding) {
            Ok(WindowFrameBound::Preceding(Box::new(expr)))
        } else {
            self.expect_keyword(Keyword::Following)?;
            Ok(WindowFrameBound::Following(Box::new(expr)))
        }
    }
}
