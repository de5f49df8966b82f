//! Expression parsing: a cascade of precedence levels from `OR` (loosest)
//! down to primaries (tightest), matching the ladder in the grammar
//! design. Each level function parses everything at its level and
//! tighter by delegating to the next function down, then loops
//! consuming its own operators left-associatively.

use crate::ast::{
    BinaryOp, Expr, FunctionArgs, FunctionCall, InSource, Literal, MatchOp, RaiseAction, UnaryOp,
    WindowSpec,
};
use crate::diagnostic::SyntaxError;
use crate::keyword::Keyword;
use crate::lexer::TokenKind;

use super::core::Parser;

/// Keywords that, immediately after a `NOT`, form one of the negatable
/// operator-level constructs rather than a standalone prefix `NOT`.
fn starts_negatable_operator(kw: Keyword) -> bool {
    matches!(
        kw,
        Keyword::In | Keyword::Like | Keyword::Glob | Keyword::Match | Keyword::Regexp | Keyword::Between
    )
}

impl<'a> Parser<'a> {
    /// Entry point: level 1, `OR`.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_and()?;
        while self.at_keyword(Keyword::Or) {
            self.advance();
            let right = self.parse_and()?;
            let span = left.span().merge(right.span());
            left = Expr::Binary {
                left: Box::new(left),
                op: BinaryOp::Or,
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_not()?;
        while self.at_keyword(Keyword::And) {
            self.advance();
            let right = self.parse_not()?;
            let span = left.span().merge(right.span());
            left = Expr::Binary {
                left: Box::new(left),
                op: BinaryOp::And,
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    /// Level 3: standalone prefix `NOT`. `NOT IN/LIKE/GLOB/MATCH/
    /// REGEXP/BETWEEN` are handled as negated operators one level down
    /// instead, so this only fires for a genuine leading `NOT expr`
    /// (including `NOT EXISTS (...)`).
    fn parse_not(&mut self) -> Result<Expr, SyntaxError> {
        if self.at_keyword(Keyword::Not) {
            let next_is_operator = matches!(self.peek_kind(1), TokenKind::Keyword(kw) if starts_negatable_operator(*kw));
            if !next_is_operator {
                let start = self.current().span;
                self.advance();
                let operand = self.parse_not()?;
                let span = start.merge(operand.span());
                return Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                    span,
                });
            }
        }
        self.parse_equality()
    }

    /// Level 4: the cluster of operators SQLite groups at one
    /// precedence: `=`, `!=`, `IS [NOT] [DISTINCT FROM]`, `IN`, `LIKE`
    /// family, `ISNULL`/`NOTNULL`, `BETWEEN`.
    fn parse_equality(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_relational()?;
        loop {
            let negated = self.at_keyword(Keyword::Not)
                && matches!(self.peek_kind(1), TokenKind::Keyword(kw) if starts_negatable_operator(*kw));
            if negated {
                self.advance(); // NOT
            }

            match self.current().kind.clone() {
                TokenKind::Eq => {
                    self.advance();
                    let right = self.parse_relational()?;
                    left = self.mk_binary(left, BinaryOp::Eq, right);
                }
                TokenKind::NotEq => {
                    self.advance();
                    let right = self.parse_relational()?;
                    left = self.mk_binary(left, BinaryOp::NotEq, right);
                }
                TokenKind::Keyword(Keyword::In) => {
                    self.advance();
                    left = self.parse_in_tail(left, negated)?;
                }
                TokenKind::Keyword(kw @ (Keyword::Like | Keyword::Glob | Keyword::Match | Keyword::Regexp)) => {
                    self.advance();
                    left = self.parse_match_tail(left, kw, negated)?;
                }
                TokenKind::Keyword(Keyword::Between) => {
                    self.advance();
                    left = self.parse_between_tail(left, negated)?;
                }
                TokenKind::Keyword(Keyword::Is) if !negated => {
                    self.advance();
                    left = self.parse_is_tail(left)?;
                }
                TokenKind::Keyword(Keyword::Isnull) if !negated => {
                    let span = left.span().merge(self.current().span);
                    self.advance();
                    left = Expr::IsNull {
                        expr: Box::new(left),
                        negated: false,
                        span,
                    };
                }
                TokenKind::Keyword(Keyword::Notnull) if !negated => {
                    let span = left.span().merge(self.current().span);
                    self.advance();
                    left = Expr::IsNull {
                        expr: Box::new(left),
                        negated: true,
                        span,
                    };
                }
                _ => {
                    if negated {
                        return Err(self.unexpected("IN, LIKE, GLOB, MATCH, REGEXP, or BETWEEN"));
                    }
                    break;
                }
            }
        }
        Ok(left)
    }

    fn parse_in_tail(&mut self, expr: Expr, negated: bool) -> Result<Expr, SyntaxError> {
        let start = expr.span();
        let source = if self.eat_kind(&TokenKind::LParen) {
            let is_select = self.at_keyword(Keyword::Select)
                || self.at_keyword(Keyword::Values)
                || self.at_keyword(Keyword::With);
            let source = if is_select {
                InSource::Subquery(Box::new(self.parse_select_statement(None)?))
            } else if self.current().kind == TokenKind::RParen {
                InSource::List(Vec::new())
            } else {
                let mut items = vec![self.parse_expr()?];
                while self.eat_kind(&TokenKind::Comma) {
                    items.push(self.parse_expr()?);
                }
                InSource::List(items)
            };
            self.expect_kind(&TokenKind::RParen)?;
            source
        } else {
            let (schema, name) = self.parse_qualified_name()?;
            let args = if self.eat_kind(&TokenKind::LParen) {
                let mut items = Vec::new();
                if self.current().kind != TokenKind::RParen {
                    items.push(self.parse_expr()?);
                    while self.eat_kind(&TokenKind::Comma) {
                        items.push(self.parse_expr()?);
                    }
                }
                self.expect_kind(&TokenKind::RParen)?;
                items
            } else {
                Vec::new()
            };
            InSource::Table { schema, name, args }
        };
        let span = start.merge(self.previous().span);
        Ok(Expr::In {
            expr: Box::new(expr),
            source,
            negated,
            span,
        })
    }

    fn parse_match_tail(&mut self, expr: Expr, kw: Keyword, negated: bool) -> Result<Expr, SyntaxError> {
        let op = match kw {
            Keyword::Like => MatchOp::Like,
            Keyword::Glob => MatchOp::Glob,
            Keyword::Match => MatchOp::Match,
            Keyword::Regexp => MatchOp::Regexp,
            _ => unreachable!("caller only passes match-family keywords"),
        };
        let pattern = self.parse_relational()?;
        let escape = if op == MatchOp::Like && self.eat_keyword(Keyword::Escape) {
            Some(Box::new(self.parse_relational()?))
        } else {
            None
        };
        let span = expr.span().merge(pattern.span());
        Ok(Expr::Match {
            expr: Box::new(expr),
            op,
            pattern: Box::new(pattern),
            escape,
            negated,
            span,
        })
    }

    fn parse_between_tail(&mut self, expr: Expr, negated: bool) -> Result<Expr, SyntaxError> {
        let low = self.parse_relational()?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_relational()?;
        let span = expr.span().merge(high.span());
        Ok(Expr::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
            negated,
            span,
        })
    }

    fn parse_is_tail(&mut self, left: Expr) -> Result<Expr, SyntaxError> {
        let negated = self.eat_keyword(Keyword::Not);
        if self.at_keyword(Keyword::Null) {
            let span = left.span().merge(self.current().span);
            self.advance();
            return Ok(Expr::IsNull {
                expr: Box::new(left),
                negated,
                span,
            });
        }
        let distinct = if self.at_keyword(Keyword::Distinct) {
            self.advance();
            self.expect_keyword(Keyword::From)?;
            true
        } else {
            false
        };
        let right = self.parse_relational()?;
        let span = left.span().merge(right.span());
        Ok(Expr::Is {
            left: Box::new(left),
            right: Box::new(right),
            negated,
            distinct,
            span,
        })
    }

    /// Level 5: `<`, `>`, `<=`, `>=`. Exposed to the window-frame-bound
    /// parser too, which parses a bound's `expr` at this precedence so
    /// that `1 + 1 PRECEDING` isn't misread as swallowing a following
    /// `AND`/`OR`.
    pub(super) fn parse_relational(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_bitwise()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_bitwise()?;
            left = self.mk_binary(left, op, right);
        }
        Ok(left)
    }

    /// Level 6: `&`, `|`, `<<`, `>>`.
    fn parse_bitwise(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.current().kind {
                TokenKind::BitAnd => BinaryOp::BitAnd,
                TokenKind::BitOr => BinaryOp::BitOr,
                TokenKind::Shl => BinaryOp::Shl,
                TokenKind::Shr => BinaryOp::Shr,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = self.mk_binary(left, op, right);
        }
        Ok(left)
    }

    /// Level 7: `+`, `-`.
    fn parse_additive(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.mk_binary(left, op, right);
        }
        Ok(left)
    }

    /// Level 8: `*`, `/`, `%`.
    fn parse_multiplicative(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_concat()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_concat()?;
            left = self.mk_binary(left, op, right);
        }
        Ok(left)
    }

    /// Level 9: `||`, `->`, `->>`.
    fn parse_concat(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_collate()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Concat => BinaryOp::Concat,
                TokenKind::Arrow => BinaryOp::Arrow,
                TokenKind::Arrow2 => BinaryOp::Arrow2,
                _ => break,
            };
            self.advance();
            let right = self.parse_collate()?;
            left = self.mk_binary(left, op, right);
        }
        Ok(left)
    }

    /// Level 10: postfix `COLLATE name`.
    fn parse_collate(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_unary()?;
        while self.at_keyword(Keyword::Collate) {
            self.advance();
            let collation = self.expect_ident()?;
            let span = expr.span().merge(self.previous().span);
            expr = Expr::Collate {
                expr: Box::new(expr),
                collation,
                span,
            };
        }
        Ok(expr)
    }

    /// Level 11: prefix `+`, `-`, `~`. Exposed to the schema parser,
    /// which parses a column's `DEFAULT` value at this precedence to
    /// accept signed-number and bare-literal forms without pulling in
    /// binary operators.
    pub(super) fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        let (op, start) = match self.current().kind {
            TokenKind::Minus => (UnaryOp::Neg, self.current().span),
            TokenKind::Plus => (UnaryOp::Plus, self.current().span),
            TokenKind::BitNot => (UnaryOp::BitNot, self.current().span),
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        let span = start.merge(operand.span());
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            span,
        })
    }

    fn mk_binary(&self, left: Expr, op: BinaryOp, right: Expr) -> Expr {
        let span = left.span().merge(right.span());
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        }
    }

    /// Level 12: literals, identifiers, parenthesized/subquery forms,
    /// `CASE`, `CAST`, `EXISTS`, function calls, `RAISE`.
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        match self.current().kind.clone() {
            TokenKind::Number(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::Number(text), start))
            }
            TokenKind::String(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::String(text), start))
            }
            TokenKind::Blob(bytes) => {
                self.advance();
                Ok(Expr::Literal(Literal::Blob(bytes), start))
            }
            TokenKind::Parameter(kind) => {
                self.advance();
                Ok(Expr::Parameter(kind, start))
            }
            TokenKind::Star => {
                self.advance();
                Ok(Expr::Wildcard { table: None, span: start })
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::Literal(Literal::Null, start))
            }
            TokenKind::Keyword(Keyword::CurrentTime) => {
                self.advance();
                Ok(Expr::Literal(Literal::CurrentTime, start))
            }
            TokenKind::Keyword(Keyword::CurrentDate) => {
                self.advance();
                Ok(Expr::Literal(Literal::CurrentDate, start))
            }
            TokenKind::Keyword(Keyword::CurrentTimestamp) => {
                self.advance();
                Ok(Expr::Literal(Literal::CurrentTimestamp, start))
            }
            TokenKind::Keyword(Keyword::Case) => self.parse_case(),
            TokenKind::Keyword(Keyword::Cast) => self.parse_cast(),
            TokenKind::Keyword(Keyword::Exists) => self.parse_exists(false),
            TokenKind::Keyword(Keyword::Not) if self.at_keyword_at(1, Keyword::Exists) => {
                self.advance();
                self.parse_exists(true)
            }
            TokenKind::Keyword(Keyword::Raise) => self.parse_raise(),
            TokenKind::LParen => self.parse_paren_or_subquery(),
            TokenKind::Ident(_) => self.parse_identifier_or_call(),
            TokenKind::Keyword(kw) if kw.is_bare_word_friendly() => self.parse_identifier_or_call(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_exists(&mut self, negated: bool) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Exists)?;
        self.expect_kind(&TokenKind::LParen)?;
        let subquery = self.parse_select_statement(None)?;
        let end = self.expect_kind(&TokenKind::RParen)?;
        Ok(Expr::Exists {
            subquery: Box::new(subquery),
            negated,
            span: start.merge(end.span),
        })
    }

    fn parse_paren_or_subquery(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        self.advance(); // '('
        if self.at_keyword(Keyword::Select) || self.at_keyword(Keyword::Values) || self.at_keyword(Keyword::With) {
            let select = self.parse_select_statement(None)?;
            let end = self.expect_kind(&TokenKind::RParen)?;
            return Ok(Expr::Subquery(Box::new(select), start.merge(end.span)));
        }
        let inner = self.parse_expr()?;
        let end = self.expect_kind(&TokenKind::RParen)?;
        Ok(Expr::Paren(Box::new(inner), start.merge(end.span)))
    }

    fn parse_case(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        self.advance(); // CASE
        let operand = if self.at_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        let mut when_then = Vec::new();
        while self.eat_keyword(Keyword::When) {
            let cond = self.parse_expr()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expr()?;
            when_then.push((cond, result));
        }
        if when_then.is_empty() {
            return Err(self.unexpected("WHEN"));
        }
        let else_branch = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        let end = self.expect_keyword(Keyword::End)?;
        Ok(Expr::Case {
            operand,
            when_then,
            else_branch,
            span: start.merge(end.span),
        })
    }

    fn parse_cast(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        self.advance(); // CAST
        self.expect_kind(&TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let type_name = self.parse_type_name()?;
        let end = self.expect_kind(&TokenKind::RParen)?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            type_name,
            span: start.merge(end.span),
        })
    }

    fn parse_raise(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        self.advance(); // RAISE
        self.expect_kind(&TokenKind::LParen)?;
        let action = if self.eat_keyword(Keyword::Ignore) {
            RaiseAction::Ignore
        } else if self.eat_keyword(Keyword::Rollback) {
            self.expect_kind(&TokenKind::Comma)?;
            RaiseAction::Rollback(self.expect_string_literal()?)
        } else if self.eat_keyword(Keyword::Abort) {
            self.expect_kind(&TokenKind::Comma)?;
            RaiseAction::Abort(self.expect_string_literal()?)
        } else if self.eat_keyword(Keyword::Fail) {
            self.expect_kind(&TokenKind::Comma)?;
            RaiseAction::Fail(self.expect_string_literal()?)
        } else {
            return Err(self.unexpected("IGNORE, ROLLBACK, ABORT, or FAIL"));
        };
        let end = self.expect_kind(&TokenKind::RParen)?;
        Ok(Expr::Raise(action, start.merge(end.span)))
    }

    pub(super) fn expect_string_literal(&mut self) -> Result<String, SyntaxError> {
        match self.current().kind.clone() {
            TokenKind::String(s) => {
                self.advance();
                Ok(s)
            }
            _ => Err(self.unexpected("string literal")),
        }
    }

    /// Parses a bare/qualified identifier, possibly turning into a
    /// function call or `table.*` wildcard, using bounded lookahead to
    /// tell the forms apart.
    fn parse_identifier_or_call(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current().span;
        let first = self.expect_ident()?;

        if self.current().kind == TokenKind::Dot {
            self.advance();
            if self.current().kind == TokenKind::Star {
                let end = self.current().span;
                self.advance();
                return Ok(Expr::Wildcard {
                    table: Some(first),
                    span: start.merge(end),
                });
            }
            let second = self.expect_ident()?;
            if self.current().kind == TokenKind::Dot {
                self.advance();
                let third = self.expect_ident()?;
                let span = start.merge(self.previous().span);
                return Ok(Expr::QualifiedIdentifier(vec![first, second, third], span));
            }
            let span = start.merge(self.previous().span);
            return Ok(Expr::QualifiedIdentifier(vec![first, second], span));
        }

        if self.current().kind == TokenKind::LParen {
            return self.parse_function_call_tail(first, start);
        }

        Ok(Expr::Identifier(first, start))
    }

    fn parse_function_call_tail(&mut self, name: String, start: crate::span::Span) -> Result<Expr, SyntaxError> {
        self.advance(); // '('
        let distinct = self.eat_keyword(Keyword::Distinct);
        let args = if self.current().kind == TokenKind::Star {
            self.advance();
            FunctionArgs::Wildcard
        } else if self.current().kind == TokenKind::RParen {
            FunctionArgs::List(Vec::new())
        } else {
            let mut items = vec![self.parse_expr()?];
            while self.eat_kind(&TokenKind::Comma) {
                items.push(self.parse_expr()?);
            }
            FunctionArgs::List(items)
        };
        let mut end = self.expect_kind(&TokenKind::RParen)?.span;

        let filter = if self.at_keyword(Keyword::Filter) {
            self.advance();
            self.expect_kind(&TokenKind::LParen)?;
            self.expect_keyword(Keyword::Where)?;
            let cond = self.parse_expr()?;
            end = self.expect_kind(&TokenKind::RParen)?.span;
            Some(Box::new(cond))
        } else {
            None
        };

        let over = if self.at_keyword(Keyword::Over) {
            self.advance();
            let spec = if self.current().kind == TokenKind::LParen {
                WindowSpec::Inline(self.parse_window_def()?)
            } else {
                WindowSpec::Named(self.expect_ident()?)
            };
            end = self.previous().span;
            Some(spec)
        } else {
            None
        };

        if over.is_some() && distinct {
            return Err(self.structural_error(
                "a function call with an OVER window cannot also specify DISTINCT",
                start.merge(end),
            ));
        }

        Ok(Expr::Function(
            FunctionCall {
                name,
                args,
                distinct,
                filter,
                over,
            },
            start.merge(end),
        ))
    }
}
