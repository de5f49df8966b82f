//! Abstract Syntax Tree (AST) types for SQLite's SQL dialect.

mod clause;
mod expr;
mod schema;
mod stmt;

pub use clause::{
    Assignment, CompoundOp, Cte, Distinctness, FrameExclude, FrameSpec, FrameUnit, FromClause,
    Indexed, IndexedColumn, JoinConstraint, JoinKind, Limit, NullsOrder, OrderDirection,
    OrderingTerm, QualifiedTableName, ReturningClause, SelectColumn, SelectCore, SelectStatement,
    TableExpr, UpsertAction, UpsertClause, UpsertTarget, WindowDef, WindowFrameBound, With,
};
pub use expr::{
    BinaryOp, Expr, FunctionArgs, FunctionCall, InSource, Literal, MatchOp, RaiseAction, UnaryOp,
    WindowSpec,
};
pub use schema::{
    ColumnConstraint, ColumnConstraintKind, ColumnDef, ConflictAction, Deferrable, FkAction,
    FkActionKind, FkEvent, ForeignKeyClause, GeneratedKind, InitiallyKind, TableConstraint,
    TableConstraintKind, TableOptions, TypeName,
};
pub use stmt::{
    AlterTableAction, AlterTableStatement, AttachStatement, BeginStatement,
    CreateIndexStatement, CreateTableBody, CreateTableStatement, CreateTriggerStatement,
    CreateVirtualTableStatement, CreateViewStatement, DeleteStatement, DropKind, DropStatement,
    InsertSource, InsertStatement, PragmaStatement, PragmaValue, QualifiedName,
    RollbackStatement, Statement, TransactionMode, TriggerEvent, TriggerTiming, UpdateStatement,
};
