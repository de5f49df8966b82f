//! `CREATE TABLE`/`INDEX`/`VIEW`/`TRIGGER`/`VIRTUAL TABLE`, `ALTER
//! TABLE`, and `DROP`, plus the column/table constraint and type-name
//! grammars they share.

use crate::ast::{
    AlterTableAction, AlterTableStatement, ColumnConstraint, ColumnConstraintKind, ColumnDef,
    ConflictAction, CreateIndexStatement, CreateTableBody, CreateTableStatement,
    CreateTriggerStatement, CreateVirtualTableStatement, CreateViewStatement, Deferrable,
    DropKind, DropStatement, FkAction, FkActionKind, FkEvent, ForeignKeyClause, GeneratedKind,
    InitiallyKind, Statement, TableConstraint, TableConstraintKind, TableOptions, TriggerEvent,
    TriggerTiming, TypeName,
};
use crate::diagnostic::SyntaxError;
use crate::keyword::Keyword;
use crate::lexer::TokenKind;

use super::core::Parser;

impl<'a> Parser<'a> {
    pub(super) fn parse_create(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Create)?;
        if self.eat_keyword(Keyword::Unique) {
            return self.parse_create_index(start, true);
        }
        let temporary = self.eat_keyword(Keyword::Temp) || self.eat_keyword(Keyword::Temporary);
        match self.current().as_keyword() {
            Some(Keyword::Table) => self.parse_create_table(start, temporary),
            Some(Keyword::Index) => self.parse_create_index(start, false),
            Some(Keyword::View) => self.parse_create_view(start, temporary),
            Some(Keyword::Trigger) => self.parse_create_trigger(start, temporary),
            Some(Keyword::Virtual) => self.parse_create_virtual_table(start),
            _ => Err(self.unexpected("TABLE, INDEX, VIEW, TRIGGER, or VIRTUAL TABLE")),
        }
    }

    fn parse_if_not_exists(&mut self) -> Result<bool, SyntaxError> {
        if self.eat_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn parse_create_table(
        &mut self,
        start: crate::span::Span,
        temporary: bool,
    ) -> Result<Statement, SyntaxError> {
        self.expect_keyword(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let (schema, name) = self.parse_qualified_name()?;
        let body = if self.eat_keyword(Keyword::As) {
            CreateTableBody::AsSelect(Box::new(self.parse_select_statement(None)?))
        } else {
            self.expect_kind(&TokenKind::LParen)?;
            let mut columns = Vec::new();
            let mut constraints = Vec::new();
            loop {
                if self.at_table_constraint_start() {
                    constraints.push(self.parse_table_constraint()?);
                } else {
                    columns.push(self.parse_column_def()?);
                }
                if !self.eat_kind(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect_kind(&TokenKind::RParen)?;
            let options = self.parse_table_options()?;
            CreateTableBody::Columns {
                columns,
                constraints,
                options,
            }
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::CreateTable(CreateTableStatement {
            temporary,
            if_not_exists,
            schema,
            name,
            body,
            span,
        }))
    }

    fn at_table_constraint_start(&self) -> bool {
        matches!(
            self.current().as_keyword(),
            Some(
                Keyword::Constraint
                    | Keyword::Primary
                    | Keyword::Unique
                    | Keyword::Check
                    | Keyword::Foreign
            )
        )
    }

    fn parse_table_options(&mut self) -> Result<TableOptions, SyntaxError> {
        let mut options = TableOptions::default();
        loop {
            if self.eat_keyword(Keyword::Without) {
                let word = self.expect_ident()?;
                if !word.eq_ignore_ascii_case("rowid") {
                    return Err(self.structural_error(
                        "expected ROWID after WITHOUT",
                        self.current().span,
                    ));
                }
                options.without_rowid = true;
            } else if matches!(&self.current().kind, TokenKind::Ident(w) if w.eq_ignore_ascii_case("strict"))
            {
                self.advance();
                options.strict = true;
            } else {
                break;
            }
            if !self.eat_kind(&TokenKind::Comma) {
                break;
            }
        }
        Ok(options)
    }

    fn parse_create_index(
        &mut self,
        start: crate::span::Span,
        unique: bool,
    ) -> Result<Statement, SyntaxError> {
        self.expect_keyword(Keyword::Index)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let (schema, name) = self.parse_qualified_name()?;
        self.expect_keyword(Keyword::On)?;
        let table = self.expect_ident()?;
        let columns = self.parse_indexed_column_list()?;
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::CreateIndex(CreateIndexStatement {
            unique,
            if_not_exists,
            schema,
            name,
            table,
            columns,
            where_clause,
            span,
        }))
    }

    fn parse_create_view(
        &mut self,
        start: crate::span::Span,
        temporary: bool,
    ) -> Result<Statement, SyntaxError> {
        self.expect_keyword(Keyword::View)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let (schema, name) = self.parse_qualified_name()?;
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
        self.expect_keyword(Keyword::As)?;
        let query = Box::new(self.parse_select_statement(None)?);
        let span = start.merge(self.previous().span);
        Ok(Statement::CreateView(CreateViewStatement {
            temporary,
            if_not_exists,
            schema,
            name,
            columns,
            query,
            span,
        }))
    }

    fn parse_create_trigger(
        &mut self,
        start: crate::span::Span,
        temporary: bool,
    ) -> Result<Statement, SyntaxError> {
        self.expect_keyword(Keyword::Trigger)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let (schema, name) = self.parse_qualified_name()?;
        let timing = if self.eat_keyword(Keyword::Before) {
            Some(TriggerTiming::Before)
        } else if self.eat_keyword(Keyword::After) {
            Some(TriggerTiming::After)
        } else if self.eat_keyword(Keyword::Instead) {
            self.expect_keyword(Keyword::Of)?;
            Some(TriggerTiming::InsteadOf)
        } else {
            None
        };
        let event = if self.eat_keyword(Keyword::Delete) {
            TriggerEvent::Delete
        } else if self.eat_keyword(Keyword::Insert) {
            TriggerEvent::Insert
        } else {
            self.expect_keyword(Keyword::Update)?;
            let columns = if self.eat_keyword(Keyword::Of) {
                let mut cols = vec![self.expect_ident()?];
                while self.eat_kind(&TokenKind::Comma) {
                    cols.push(self.expect_ident()?);
                }
                cols
            } else {
                Vec::new()
            };
            TriggerEvent::Update { columns }
        };
        self.expect_keyword(Keyword::On)?;
        let table = self.expect_ident()?;
        let for_each_row = if self.eat_keyword(Keyword::For) {
            self.expect_keyword(Keyword::Each)?;
            self.expect_keyword(Keyword::Row)?;
            true
        } else {
            false
        };
        let when_clause = if self.eat_keyword(Keyword::When) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::Begin)?;
        let mut body = Vec::new();
        while !self.at_keyword(Keyword::End) {
            let stmt = self.parse_statement()?;
            if !stmt.is_trigger_body_statement() {
                return Err(self.structural_error(
                    "trigger bodies may only contain SELECT, INSERT, UPDATE, or DELETE",
                    stmt.span(),
                ));
            }
            self.expect_kind(&TokenKind::Semicolon)?;
            body.push(stmt);
        }
        self.expect_keyword(Keyword::End)?;
        let span = start.merge(self.previous().span);
        Ok(Statement::CreateTrigger(CreateTriggerStatement {
            temporary,
            if_not_exists,
            schema,
            name,
            timing,
            event,
            table,
            for_each_row,
            when_clause,
            body,
            span,
        }))
    }

    fn parse_create_virtual_table(
        &mut self,
        start: crate::span::Span,
    ) -> Result<Statement, SyntaxError> {
        self.expect_keyword(Keyword::Virtual)?;
        self.expect_keyword(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let (schema, name) = self.parse_qualified_name()?;
        self.expect_keyword(Keyword::Using)?;
        let module = self.expect_ident()?;
        let mut module_args = Vec::new();
        if self.eat_kind(&TokenKind::LParen) {
            if self.current().kind != TokenKind::RParen {
                module_args.push(self.parse_module_arg()?);
                while self.eat_kind(&TokenKind::Comma) {
                    module_args.push(self.parse_module_arg()?);
                }
            }
            self.expect_kind(&TokenKind::RParen)?;
        }
        let span = start.merge(self.previous().span);
        Ok(Statement::CreateVirtualTable(CreateVirtualTableStatement {
            if_not_exists,
            schema,
            name,
            module,
            module_args,
            span,
        }))
    }

    /// Collects raw source text for one comma-separated virtual-table
    /// module argument, tracking paren depth so a nested `(...)` inside
    /// an argument doesn't end it early.
    fn parse_module_arg(&mut self) -> Result<String, SyntaxError> {
        let start_pos = self.current().span.start;
        let mut depth: i32 = 0;
        let mut end_pos = start_pos;
        loop {
            match &self.current().kind {
                TokenKind::Comma if depth == 0 => break,
                TokenKind::RParen if depth == 0 => break,
                TokenKind::Eof => return Err(self.unexpected("')'")),
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            end_pos = self.current().span.end;
            self.advance();
        }
        Ok(self.source[start_pos..end_pos].trim().to_string())
    }

    pub(super) fn parse_alter_table(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Alter)?;
        self.expect_keyword(Keyword::Table)?;
        let (schema, name) = self.parse_qualified_name()?;
        let action = if self.eat_keyword(Keyword::Rename) {
            if self.eat_keyword(Keyword::To) {
                AlterTableAction::RenameTo(self.expect_ident()?)
            } else {
                self.eat_keyword(Keyword::Column);
                let from = self.expect_ident()?;
                self.expect_keyword(Keyword::To)?;
                let to = self.expect_ident()?;
                AlterTableAction::RenameColumn { from, to }
            }
        } else if self.eat_keyword(Keyword::Add) {
            self.eat_keyword(Keyword::Column);
            let column = self.parse_column_def()?;
            if column.constraints.iter().any(|c| {
                matches!(
                    c.kind,
                    ColumnConstraintKind::Generated {
                        kind: GeneratedKind::Stored,
                        ..
                    }
                )
            }) {
                return Err(self.structural_error(
                    "cannot add a STORED generated column with ALTER TABLE",
                    column.span,
                ));
            }
            AlterTableAction::AddColumn(column)
        } else if self.eat_keyword(Keyword::Drop) {
            self.eat_keyword(Keyword::Column);
            AlterTableAction::DropColumn(self.expect_ident()?)
        } else {
            return Err(self.unexpected("RENAME, ADD, or DROP"));
        };
        let span = start.merge(self.previous().span);
        Ok(Statement::AlterTable(AlterTableStatement {
            schema,
            name,
            action,
            span,
        }))
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        self.expect_keyword(Keyword::Drop)?;
        let kind = if self.eat_keyword(Keyword::Table) {
            DropKind::Table
        } else if self.eat_keyword(Keyword::Index) {
            DropKind::Index
        } else if self.eat_keyword(Keyword::View) {
            DropKind::View
        } else {
            self.expect_keyword(Keyword::Trigger)?;
            DropKind::Trigger
        };
        let if_exists = if self.eat_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Exists)?;
            true
        } else {
            false
        };
        let (schema, name) = self.parse_qualified_name()?;
        let span = start.merge(self.previous().span);
        Ok(Statement::Drop(DropStatement {
            kind,
            if_exists,
            schema,
            name,
            span,
        }))
    }

    // --- column/table constraints, shared by CREATE TABLE and ALTER TABLE ---

    fn parse_column_def(&mut self) -> Result<ColumnDef, SyntaxError> {
        let start = self.current().span;
        let name = self.expect_ident()?;
        let type_name = if matches!(self.current().kind, TokenKind::Ident(_)) {
            Some(self.parse_type_name()?)
        } else {
            None
        };
        let mut constraints = Vec::new();
        while self.at_column_constraint_start() {
            constraints.push(self.parse_column_constraint()?);
        }
        let span = start.merge(self.previous().span);
        Ok(ColumnDef {
            name,
            type_name,
            constraints,
            span,
        })
    }

    fn at_column_constraint_start(&self) -> bool {
        matches!(
            self.current().as_keyword(),
            Some(
                Keyword::Constraint
                    | Keyword::Primary
                    | Keyword::Not
                    | Keyword::Unique
                    | Keyword::Check
                    | Keyword::Default
                    | Keyword::Collate
                    | Keyword::References
                    | Keyword::Generated
                    | Keyword::As
            )
        )
    }

    fn parse_column_constraint(&mut self) -> Result<ColumnConstraint, SyntaxError> {
        let start = self.current().span;
        let name = if self.eat_keyword(Keyword::Constraint) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let kind = match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                let ascending = if self.eat_keyword(Keyword::Asc) {
                    Some(true)
                } else if self.eat_keyword(Keyword::Desc) {
                    Some(false)
                } else {
                    None
                };
                let conflict = self.parse_optional_conflict_clause()?;
                let autoincrement = self.eat_keyword(Keyword::Autoincrement);
                ColumnConstraintKind::PrimaryKey {
                    ascending,
                    conflict,
                    autoincrement,
                }
            }
            Some(Keyword::Not) => {
                self.advance();
                self.expect_keyword(Keyword::Null)?;
                let conflict = self.parse_optional_conflict_clause()?;
                ColumnConstraintKind::NotNull { conflict }
            }
            Some(Keyword::Unique) => {
                self.advance();
                let conflict = self.parse_optional_conflict_clause()?;
                ColumnConstraintKind::Unique { conflict }
            }
            Some(Keyword::Check) => {
                self.advance();
                self.expect_kind(&TokenKind::LParen)?;
                let expr = self.parse_expr()?;
                self.expect_kind(&TokenKind::RParen)?;
                ColumnConstraintKind::Check(expr)
            }
            Some(Keyword::Default) => {
                self.advance();
                ColumnConstraintKind::Default(self.parse_default_value()?)
            }
            Some(Keyword::Collate) => {
                self.advance();
                ColumnConstraintKind::Collate(self.expect_ident()?)
            }
            Some(Keyword::References) => {
                ColumnConstraintKind::ForeignKey(self.parse_foreign_key_clause()?)
            }
            Some(Keyword::Generated) | Some(Keyword::As) => {
                if self.eat_keyword(Keyword::Generated) {
                    self.expect_keyword(Keyword::Always)?;
                }
                self.expect_keyword(Keyword::As)?;
                self.expect_kind(&TokenKind::LParen)?;
                let expr = self.parse_expr()?;
                self.expect_kind(&TokenKind::RParen)?;
                // STORED isn't a reserved word, so it lexes as a bare
                // identifier; VIRTUAL is reserved (CREATE VIRTUAL TABLE).
                let kind = if matches!(&self.current().kind, TokenKind::Ident(w) if w.eq_ignore_ascii_case("stored"))
                {
                    self.advance();
                    GeneratedKind::Stored
                } else {
                    self.eat_keyword(Keyword::Virtual);
                    GeneratedKind::Virtual
                };
                ColumnConstraintKind::Generated { expr, kind }
            }
            _ => return Err(self.unexpected("a column constraint")),
        };
        let span = start.merge(self.previous().span);
        Ok(ColumnConstraint { name, kind, span })
    }

    /// `DEFAULT (expr) | literal | signed-number`. Unary-prefixed
    /// literals and bare literals both parse at this level; a
    /// parenthesized expression is handled by the caller via the
    /// ordinary primary-expression grammar.
    fn parse_default_value(&mut self) -> Result<crate::ast::Expr, SyntaxError> {
        self.parse_unary()
    }

    fn parse_table_constraint(&mut self) -> Result<TableConstraint, SyntaxError> {
        let start = self.current().span;
        let name = if self.eat_keyword(Keyword::Constraint) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let kind = match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                let columns = self.parse_indexed_column_list()?;
                let conflict = self.parse_optional_conflict_clause()?;
                TableConstraintKind::PrimaryKey { columns, conflict }
            }
            Some(Keyword::Unique) => {
                self.advance();
                let columns = self.parse_indexed_column_list()?;
                let conflict = self.parse_optional_conflict_clause()?;
                TableConstraintKind::Unique { columns, conflict }
            }
            Some(Keyword::Check) => {
                self.advance();
                self.expect_kind(&TokenKind::LParen)?;
                let expr = self.parse_expr()?;
                self.expect_kind(&TokenKind::RParen)?;
                TableConstraintKind::Check(expr)
            }
            Some(Keyword::Foreign) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                self.expect_kind(&TokenKind::LParen)?;
                let mut columns = vec![self.expect_ident()?];
                while self.eat_kind(&TokenKind::Comma) {
                    columns.push(self.expect_ident()?);
                }
                self.expect_kind(&TokenKind::RParen)?;
                let clause = self.parse_foreign_key_clause()?;
                TableConstraintKind::ForeignKey { columns, clause }
            }
            _ => return Err(self.unexpected("a table constraint")),
        };
        let span = start.merge(self.previous().span);
        Ok(TableConstraint { name, kind, span })
    }

    fn parse_foreign_key_clause(&mut self) -> Result<ForeignKeyClause, SyntaxError> {
        self.expect_keyword(Keyword::References)?;
        let table = self.expect_ident()?;
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
        let mut actions = Vec::new();
        let mut match_name = None;
        loop {
            if self.eat_keyword(Keyword::On) {
                let event = if self.eat_keyword(Keyword::Delete) {
                    FkEvent::Delete
                } else {
                    self.expect_keyword(Keyword::Update)?;
                    FkEvent::Update
                };
                let action = if self.eat_keyword(Keyword::Set) {
                    if self.eat_keyword(Keyword::Null) {
                        FkActionKind::SetNull
                    } else {
                        self.expect_keyword(Keyword::Default)?;
                        FkActionKind::SetDefault
                    }
                } else if self.eat_keyword(Keyword::Cascade) {
                    FkActionKind::Cascade
                } else if self.eat_keyword(Keyword::Restrict) {
                    FkActionKind::Restrict
                } else {
                    self.expect_keyword(Keyword::No)?;
                    self.expect_keyword(Keyword::Action)?;
                    FkActionKind::NoAction
                };
                actions.push(FkAction { event, action });
            } else if self.eat_keyword(Keyword::Match) {
                match_name = Some(self.expect_ident()?);
            } else {
                break;
            }
        }
        let deferrable = self.parse_optional_deferrable()?;
        Ok(ForeignKeyClause {
            table,
            columns,
            actions,
            match_name,
            deferrable,
        })
    }

    fn parse_optional_deferrable(&mut self) -> Result<Option<Deferrable>, SyntaxError> {
        let mark = self.mark();
        let not = self.eat_keyword(Keyword::Not);
        if self.eat_keyword(Keyword::Deferrable) {
            let initially = if self.eat_keyword(Keyword::Initially) {
                if self.eat_keyword(Keyword::Deferred) {
                    Some(InitiallyKind::Deferred)
                } else {
                    self.expect_keyword(Keyword::Immediate)?;
                    Some(InitiallyKind::Immediate)
                }
            } else {
                None
            };
            Ok(Some(Deferrable { not, initially }))
        } else if not {
            Err(self.unexpected("DEFERRABLE"))
        } else {
            self.reset(mark);
            Ok(None)
        }
    }

    pub(super) fn parse_optional_conflict_clause(
        &mut self,
    ) -> Result<Option<ConflictAction>, SyntaxError> {
        if self.eat_keyword(Keyword::On) {
            self.expect_keyword(Keyword::Conflict)?;
            Ok(Some(self.parse_conflict_action()?))
        } else {
            Ok(None)
        }
    }

    pub(super) fn parse_conflict_action(&mut self) -> Result<ConflictAction, SyntaxError> {
        if self.eat_keyword(Keyword::Rollback) {
            Ok(ConflictAction::Rollback)
        } else if self.eat_keyword(Keyword::Abort) {
            Ok(ConflictAction::Abort)
        } else if self.eat_keyword(Keyword::Fail) {
            Ok(ConflictAction::Fail)
        } else if self.eat_keyword(Keyword::Ignore) {
            Ok(ConflictAction::Ignore)
        } else {
            self.expect_keyword(Keyword::Replace)?;
            Ok(ConflictAction::Replace)
        }
    }

    /// One or more bare words (`INTEGER`, `DOUBLE PRECISION`, `VARYING
    /// CHARACTER`, ...) plus an optional `(n)`/`(n, m)` size suffix.
    /// None of SQLite's built-in type words are reserved keywords, so
    /// they always lex as plain identifiers here.
    pub(super) fn parse_type_name(&mut self) -> Result<TypeName, SyntaxError> {
        let mut words = vec![self.expect_ident()?];
        while matches!(self.current().kind, TokenKind::Ident(_)) {
            words.push(self.expect_ident()?);
        }
        let size = if self.eat_kind(&TokenKind::LParen) {
            let first = self.parse_signed_integer()?;
            let second = if self.eat_kind(&TokenKind::Comma) {
                Some(self.parse_signed_integer()?)
            } else {
                None
            };
            self.expect_kind(&TokenKind::RParen)?;
            Some((first, second))
        } else {
            None
        };
        Ok(TypeName {
            name: words.join(" "),
            size,
        })
    }

    fn parse_signed_integer(&mut self) -> Result<i64, SyntaxError> {
        let negative = self.eat_kind(&TokenKind::Minus);
        if !negative {
            self.eat_kind(&TokenKind::Plus);
        }
        let tok = self.current().clone();
        let TokenKind::Number(text) = &tok.kind else {
            return Err(self.unexpected("an integer"));
        };
        let value: i64 = text
            .parse()
            .map_err(|_| self.structural_error("type size must be an integer", tok.span))?;
        self.advance();
        Ok(if negative { -value } else { value })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{ColumnConstraintKind, CreateTableBody, Statement};
    use crate::parser::parse;

    fn parse_one(source: &str) -> Statement {
        let (statements, diagnostics) = parse(source);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
        assert_eq!(statements.len(), 1);
        statements.into_iter().next().unwrap()
    }

    #[test]
    fn create_table_with_column_and_table_constraints() {
        let stmt = parse_one(
            "CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, \
             name TEXT NOT NULL DEFAULT 'x', UNIQUE(name));",
        );
        let Statement::CreateTable(create) = stmt else {
            panic!("expected CreateTable");
        };
        let CreateTableBody::Columns {
            columns,
            constraints,
            options,
        } = create.body
        else {
            panic!("expected Columns body");
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(constraints.len(), 1);
        assert!(!options.without_rowid);
        assert!(matches!(
            columns[0].constraints[0].kind,
            ColumnConstraintKind::PrimaryKey {
                autoincrement: true,
                ..
            }
        ));
    }

    #[test]
    fn create_table_without_rowid_strict() {
        let stmt = parse_one("CREATE TABLE t (id INTEGER PRIMARY KEY) WITHOUT ROWID, STRICT;");
        let Statement::CreateTable(create) = stmt else {
            panic!("expected CreateTable");
        };
        let CreateTableBody::Columns { options, .. } = create.body else {
            panic!("expected Columns body");
        };
        assert!(options.without_rowid);
        assert!(options.strict);
    }

    #[test]
    fn generated_column_stored_is_not_a_reserved_word() {
        let stmt = parse_one("CREATE TABLE t (a INT, b INT GENERATED ALWAYS AS (a + 1) STORED);");
        let Statement::CreateTable(create) = stmt else {
            panic!("expected CreateTable");
        };
        let CreateTableBody::Columns { columns, .. } = create.body else {
            panic!("expected Columns body");
        };
        assert!(matches!(
            columns[1].constraints[0].kind,
            ColumnConstraintKind::Generated {
                kind: crate::ast::GeneratedKind::Stored,
                ..
            }
        ));
    }

    #[test]
    fn create_unique_index_with_where_clause() {
        let stmt = parse_one("CREATE UNIQUE INDEX idx ON t(a, b) WHERE a IS NOT NULL;");
        let Statement::CreateIndex(index) = stmt else {
            panic!("expected CreateIndex");
        };
        assert!(index.unique);
        assert_eq!(index.columns.len(), 2);
        assert!(index.where_clause.is_some());
    }

    #[test]
    fn create_trigger_rejects_non_dml_body_statement() {
        let (_statements, diagnostics) = parse(
            "CREATE TRIGGER trg AFTER INSERT ON t BEGIN \
             CREATE TABLE nope(a INT); END;",
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn alter_table_rename_and_add_column() {
        let stmt = parse_one("ALTER TABLE t RENAME TO t2;");
        assert!(matches!(
            stmt,
            Statement::AlterTable(a) if matches!(a.action, crate::ast::AlterTableAction::RenameTo(_))
        ));
        let stmt = parse_one("ALTER TABLE t ADD COLUMN c TEXT;");
        assert!(matches!(
            stmt,
            Statement::AlterTable(a) if matches!(a.action, crate::ast::AlterTableAction::AddColumn(_))
        ));
    }

    #[test]
    fn drop_table_if_exists() {
        let stmt = parse_one("DROP TABLE IF EXISTS t;");
        let Statement::Drop(drop) = stmt else {
            panic!("expected Drop");
        };
        assert!(drop.if_exists);
        assert_eq!(drop.name, "t");
    }

    #[test]
    fn type_name_with_two_word_size() {
        let stmt = parse_one("CREATE TABLE t (a DECIMAL(10, 2));");
        let Statement::CreateTable(create) = stmt else {
            panic!("expected CreateTable");
        };
        let CreateTableBody::Columns { columns, .. } = create.body else {
            panic!("expected Columns body");
        };
        let type_name = columns[0].type_name.as_ref().unwrap();
        assert_eq!(type_name.name, "DECIMAL");
        assert_eq!(type_name.size, Some((10, Some(2))));
    }

    #[test]
    fn create_virtual_table_keeps_raw_module_args() {
        let stmt = parse_one("CREATE VIRTUAL TABLE t USING fts5(a, b, tokenize = 'porter');");
        let Statement::CreateVirtualTable(vtab) = stmt else {
            panic!("expected CreateVirtualTable");
        };
        assert_eq!(vtab.module, "fts5");
        assert_eq!(vtab.module_args, vec!["a", "b", "tokenize = 'porter'"]);
    }
}
