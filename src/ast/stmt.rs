//! Top-level statement AST.

use crate::span::Span;

use super::clause::{
    Assignment, FromClause, Limit, OrderingTerm, QualifiedTableName, ReturningClause,
    SelectStatement, UpsertClause, With,
};
use super::expr::Expr;
use super::schema::{ColumnDef, ConflictAction, TableConstraint, TableOptions};

/// `VALUES (...), ...` / `SELECT ...` / `DEFAULT VALUES` as the source
/// of rows for an `INSERT`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsertSource {
    /// `VALUES (expr, ...), ...`.
    Values(Vec<Vec<Expr>>),
    /// A `SELECT` providing the rows.
    Select(Box<SelectStatement>),
    /// `DEFAULT VALUES`.
    DefaultValues,
}

/// `INSERT [OR action] INTO ...` / `REPLACE INTO ...`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertStatement {
    /// `WITH ...` prefix, if any.
    pub with: Option<With>,
    /// `OR action` (including the `REPLACE INTO` shorthand, which is
    /// recorded here as `Some(ConflictAction::Replace)`).
    pub or_action: Option<ConflictAction>,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Target table.
    pub table: String,
    /// Target table alias, if given (`AS alias`).
    pub alias: Option<String>,
    /// Target column list, if given explicitly.
    pub columns: Vec<String>,
    /// Row source.
    pub source: InsertSource,
    /// `ON CONFLICT ...` clauses, if any.
    pub upserts: Vec<UpsertClause>,
    /// `RETURNING ...`, if given.
    pub returning: Option<ReturningClause>,
    /// Location of the whole statement.
    pub span: Span,
}

/// `UPDATE [OR action] table SET ... [FROM ...] [WHERE ...] [RETURNING
/// ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateStatement {
    /// `WITH ...` prefix, if any.
    pub with: Option<With>,
    /// `OR action`, if given.
    pub or_action: Option<ConflictAction>,
    /// Target table.
    pub table: QualifiedTableName,
    /// `SET` assignments.
    pub assignments: Vec<Assignment>,
    /// `FROM ...`, if given.
    pub from: Option<FromClause>,
    /// `WHERE ...`, if given.
    pub where_clause: Option<Expr>,
    /// `RETURNING ...`, if given.
    pub returning: Option<ReturningClause>,
    /// Trailing `ORDER BY`, always accepted by this parser regardless
    /// of whether the target SQLite build was compiled with it enabled.
    pub order_by: Vec<OrderingTerm>,
    /// Trailing `LIMIT`, same caveat as `order_by`.
    pub limit: Option<Limit>,
    /// Location of the whole statement.
    pub span: Span,
}

/// `DELETE FROM table [WHERE ...] [RETURNING ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteStatement {
    /// `WITH ...` prefix, if any.
    pub with: Option<With>,
    /// Target table.
    pub table: QualifiedTableName,
    /// `WHERE ...`, if given.
    pub where_clause: Option<Expr>,
    /// `RETURNING ...`, if given.
    pub returning: Option<ReturningClause>,
    /// Trailing `ORDER BY`, see [`UpdateStatement::order_by`].
    pub order_by: Vec<OrderingTerm>,
    /// Trailing `LIMIT`, see [`UpdateStatement::limit`].
    pub limit: Option<Limit>,
    /// Location of the whole statement.
    pub span: Span,
}

/// The body of a `CREATE TABLE`: either a literal column list, or
/// `AS select`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreateTableBody {
    /// `(coldef, ..., constraint, ...) [table-options]`.
    Columns {
        /// Column definitions, in source order.
        columns: Vec<ColumnDef>,
        /// Table-level constraints, in source order.
        constraints: Vec<TableConstraint>,
        /// Trailing `WITHOUT ROWID`/`STRICT` options.
        options: TableOptions,
    },
    /// `AS select`.
    AsSelect(Box<SelectStatement>),
}

/// `CREATE [TEMP|TEMPORARY] TABLE [IF NOT EXISTS] [schema.]name ...`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTableStatement {
    /// `TEMP`/`TEMPORARY`.
    pub temporary: bool,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    /// The table's definition.
    pub body: CreateTableBody,
    /// Location of the whole statement.
    pub span: Span,
}

/// `CREATE [UNIQUE] INDEX [IF NOT EXISTS] name ON table (cols) [WHERE
/// ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateIndexStatement {
    /// `UNIQUE`.
    pub unique: bool,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Indexed columns.
    pub columns: Vec<super::clause::IndexedColumn>,
    /// Partial-index `WHERE`, if given.
    pub where_clause: Option<Expr>,
    /// Location of the whole statement.
    pub span: Span,
}

/// `CREATE [TEMP|TEMPORARY] VIEW [IF NOT EXISTS] name [(cols)] AS
/// select`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateViewStatement {
    /// `TEMP`/`TEMPORARY`.
    pub temporary: bool,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// View name.
    pub name: String,
    /// Explicit column names, if given.
    pub columns: Vec<String>,
    /// The defining query.
    pub query: Box<SelectStatement>,
    /// Location of the whole statement.
    pub span: Span,
}

/// `BEFORE`/`AFTER`/`INSTEAD OF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerTiming {
    /// `BEFORE`.
    Before,
    /// `AFTER`.
    After,
    /// `INSTEAD OF`.
    InsteadOf,
}

/// `DELETE` / `INSERT` / `UPDATE [OF cols]`, the event a trigger fires
/// on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    /// `DELETE`.
    Delete,
    /// `INSERT`.
    Insert,
    /// `UPDATE [OF col, ...]`.
    Update {
        /// Restricted column list, if given.
        columns: Vec<String>,
    },
}

/// `CREATE [TEMP|TEMPORARY] TRIGGER ... BEGIN ... END`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTriggerStatement {
    /// `TEMP`/`TEMPORARY`.
    pub temporary: bool,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Trigger name.
    pub name: String,
    /// `BEFORE`/`AFTER`/`INSTEAD OF`, if given (omitted defaults to
    /// `BEFORE` in SQLite, but the omission itself is preserved here).
    pub timing: Option<TriggerTiming>,
    /// The firing event.
    pub event: TriggerEvent,
    /// The table (or view, for `INSTEAD OF`) the trigger is on.
    pub table: String,
    /// `FOR EACH ROW`.
    pub for_each_row: bool,
    /// `WHEN ...` guard, if given.
    pub when_clause: Option<Expr>,
    /// The trigger body: a sequence of statements, each one of
    /// `Select`/`Insert`/`Update`/`Delete`.
    pub body: Vec<Statement>,
    /// Location of the whole statement.
    pub span: Span,
}

/// `CREATE VIRTUAL TABLE [IF NOT EXISTS] name USING module [(args)]`.
/// Module arguments are kept as raw, uninterpreted text slices since
/// their grammar is module-defined, not part of SQL proper.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateVirtualTableStatement {
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    /// The virtual table module name.
    pub module: String,
    /// Raw, comma-separated module argument text.
    pub module_args: Vec<String>,
    /// Location of the whole statement.
    pub span: Span,
}

/// The action half of an `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterTableAction {
    /// `RENAME TO new_name`.
    RenameTo(String),
    /// `RENAME [COLUMN] old TO new`.
    RenameColumn {
        /// Existing column name.
        from: String,
        /// New column name.
        to: String,
    },
    /// `ADD [COLUMN] coldef`.
    AddColumn(ColumnDef),
    /// `DROP [COLUMN] name`.
    DropColumn(String),
}

/// `ALTER TABLE [schema.]name <action>`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterTableStatement {
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Table being altered.
    pub name: String,
    /// The alteration to apply.
    pub action: AlterTableAction,
    /// Location of the whole statement.
    pub span: Span,
}

/// Which kind of object a `DROP` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropKind {
    /// `DROP TABLE`.
    Table,
    /// `DROP INDEX`.
    Index,
    /// `DROP VIEW`.
    View,
    /// `DROP TRIGGER`.
    Trigger,
}

/// `DROP (TABLE|INDEX|VIEW|TRIGGER) [IF EXISTS] [schema.]name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropStatement {
    /// The kind of object being dropped.
    pub kind: DropKind,
    /// `IF EXISTS`.
    pub if_exists: bool,
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Object name.
    pub name: String,
    /// Location of the whole statement.
    pub span: Span,
}

/// `DEFERRED`/`IMMEDIATE`/`EXCLUSIVE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionMode {
    /// `DEFERRED`.
    Deferred,
    /// `IMMEDIATE`.
    Immediate,
    /// `EXCLUSIVE`.
    Exclusive,
}

/// `BEGIN [mode] [TRANSACTION]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeginStatement {
    /// The transaction mode, if given.
    pub mode: Option<TransactionMode>,
    /// Location of the whole statement.
    pub span: Span,
}

/// `ROLLBACK [TRANSACTION] [TO [SAVEPOINT] name]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollbackStatement {
    /// The savepoint to roll back to, if given.
    pub to_savepoint: Option<String>,
    /// Location of the whole statement.
    pub span: Span,
}

/// A schema-qualified name with one or two parts, used by
/// `ANALYZE`/`REINDEX`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// The name itself.
    pub name: String,
}

/// `ATTACH [DATABASE] expr AS name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachStatement {
    /// The database file expression.
    pub file: Expr,
    /// The schema name to attach it under.
    pub name: String,
    /// Location of the whole statement.
    pub span: Span,
}

/// `PRAGMA key = value` / `PRAGMA key(value)` / `PRAGMA key`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PragmaValue {
    /// `= expr` form.
    Equals(Expr),
    /// `(expr)` call form.
    Call(Expr),
}

/// `PRAGMA [schema.]name [pragma-value]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PragmaStatement {
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Pragma name.
    pub name: String,
    /// The assigned/queried value, if given.
    pub value: Option<PragmaValue>,
    /// Location of the whole statement.
    pub span: Span,
}

/// Every statement kind this parser understands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// `SELECT ...` / `VALUES ...` (with optional compound/`WITH`).
    Select(SelectStatement),
    /// `INSERT ...` / `REPLACE ...`.
    Insert(InsertStatement),
    /// `UPDATE ...`.
    Update(UpdateStatement),
    /// `DELETE ...`.
    Delete(DeleteStatement),
    /// `CREATE TABLE ...`.
    CreateTable(CreateTableStatement),
    /// `CREATE INDEX ...`.
    CreateIndex(CreateIndexStatement),
    /// `CREATE VIEW ...`.
    CreateView(CreateViewStatement),
    /// `CREATE TRIGGER ...`.
    CreateTrigger(CreateTriggerStatement),
    /// `CREATE VIRTUAL TABLE ...`.
    CreateVirtualTable(CreateVirtualTableStatement),
    /// `ALTER TABLE ...`.
    AlterTable(AlterTableStatement),
    /// `DROP TABLE/INDEX/VIEW/TRIGGER ...`.
    Drop(DropStatement),
    /// `BEGIN ...`.
    Begin(BeginStatement),
    /// `COMMIT`/`END [TRANSACTION]`.
    Commit(Span),
    /// `ROLLBACK ...`.
    Rollback(RollbackStatement),
    /// `SAVEPOINT name`.
    Savepoint(String, Span),
    /// `RELEASE [SAVEPOINT] name`.
    Release(String, Span),
    /// `ATTACH ...`.
    Attach(AttachStatement),
    /// `DETACH [DATABASE] name`.
    Detach(QualifiedName, Span),
    /// `ANALYZE [name[.name]]`.
    Analyze(Option<QualifiedName>, Span),
    /// `VACUUM [name] [INTO string]`.
    Vacuum {
        /// Schema name, if given.
        schema: Option<String>,
        /// `INTO` target file, if given.
        into: Option<String>,
        /// Location of the whole statement.
        span: Span,
    },
    /// `REINDEX [name[.name]]`.
    Reindex(Option<QualifiedName>, Span),
    /// `EXPLAIN [QUERY PLAN] stmt`.
    Explain {
        /// `QUERY PLAN` was specified.
        query_plan: bool,
        /// The wrapped statement.
        statement: Box<Statement>,
        /// Location of the whole statement (including the wrapped one).
        span: Span,
    },
    /// `PRAGMA ...`.
    Pragma(PragmaStatement),
}

impl Statement {
    /// The span covering this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Select(s) => s.span,
            Self::Insert(s) => s.span,
            Self::Update(s) => s.span,
            Self::Delete(s) => s.span,
            Self::CreateTable(s) => s.span,
            Self::CreateIndex(s) => s.span,
            Self::CreateView(s) => s.span,
            Self::CreateTrigger(s) => s.span,
            Self::CreateVirtualTable(s) => s.span,
            Self::AlterTable(s) => s.span,
            Self::Drop(s) => s.span,
            Self::Begin(s) => s.span,
            Self::Commit(span)
            | Self::Savepoint(_, span)
            | Self::Release(_, span)
            | Self::Detach(_, span)
            | Self::Analyze(_, span)
            | Self::Reindex(_, span) => *span,
            Self::Rollback(s) => s.span,
            Self::Attach(s) => s.span,
            Self::Vacuum { span, .. } | Self::Explain { span, .. } => *span,
            Self::Pragma(s) => s.span,
        }
    }

    /// True for the four statement kinds a trigger body is allowed to
    /// contain.
    #[must_use]
    pub const fn is_trigger_body_statement(&self) -> bool {
        matches!(
            self,
            Self::Select(_) | Self::Insert(_) | Self::Update(_) | Self::Delete(_)
        )
    }
}
