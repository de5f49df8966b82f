//! Schema-definition pieces shared by `CREATE TABLE`/`ALTER TABLE`.

use crate::span::Span;

use super::clause::IndexedColumn;
use super::expr::Expr;

/// A type name: one or more words (`INTEGER`, `DOUBLE PRECISION`, ...)
/// plus an optional `(n)`/`(n, m)` size suffix. SQLite does not attach
/// meaning to the words themselves (type affinity is derived from the
/// name by rule, not modeled here), so this stores text verbatim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName {
    /// The type's words, joined with a single space (`"DOUBLE PRECISION"`).
    pub name: String,
    /// `(n)` or `(n, m)`, if present.
    pub size: Option<(i64, Option<i64>)>,
}

/// `ON CONFLICT (ROLLBACK|ABORT|FAIL|IGNORE|REPLACE)`, and the same set
/// reused for `INSERT OR .../UPDATE OR ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictAction {
    /// `ROLLBACK`
    Rollback,
    /// `ABORT`
    Abort,
    /// `FAIL`
    Fail,
    /// `IGNORE`
    Ignore,
    /// `REPLACE`
    Replace,
}

/// `[NOT] DEFERRABLE [INITIALLY (DEFERRED|IMMEDIATE)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitiallyKind {
    /// `INITIALLY DEFERRED`
    Deferred,
    /// `INITIALLY IMMEDIATE`
    Immediate,
}

/// A foreign key's deferrability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deferrable {
    /// `NOT DEFERRABLE` when true.
    pub not: bool,
    /// Optional `INITIALLY ...` qualifier.
    pub initially: Option<InitiallyKind>,
}

/// `ON DELETE` or `ON UPDATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FkEvent {
    /// `ON DELETE`
    Delete,
    /// `ON UPDATE`
    Update,
}

/// The action half of an `ON DELETE`/`ON UPDATE` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FkActionKind {
    /// `SET NULL`
    SetNull,
    /// `SET DEFAULT`
    SetDefault,
    /// `CASCADE`
    Cascade,
    /// `RESTRICT`
    Restrict,
    /// `NO ACTION`
    NoAction,
}

/// A single `ON DELETE ...`/`ON UPDATE ...` entry in a foreign key
/// clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FkAction {
    /// Which event this action responds to.
    pub event: FkEvent,
    /// The action to take.
    pub action: FkActionKind,
}

/// `REFERENCES table [(cols)] (ON ... | MATCH name)* [[NOT] DEFERRABLE ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKeyClause {
    /// The referenced table.
    pub table: String,
    /// The referenced columns, if explicit.
    pub columns: Vec<String>,
    /// `ON DELETE`/`ON UPDATE` actions, in source order.
    pub actions: Vec<FkAction>,
    /// `MATCH name`, if given.
    pub match_name: Option<String>,
    /// Deferrability, if specified.
    pub deferrable: Option<Deferrable>,
}

/// `GENERATED ALWAYS AS (expr) STORED|VIRTUAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratedKind {
    /// `STORED`
    Stored,
    /// `VIRTUAL` (SQLite's default when omitted)
    Virtual,
}

/// The body of a single column constraint, unqualified by its optional
/// `CONSTRAINT name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnConstraintKind {
    /// `PRIMARY KEY [ASC|DESC] [conflict] [AUTOINCREMENT]`.
    PrimaryKey {
        /// Optional explicit ordering.
        ascending: Option<bool>,
        /// Optional conflict resolution.
        conflict: Option<ConflictAction>,
        /// `AUTOINCREMENT`.
        autoincrement: bool,
    },
    /// `NOT NULL [conflict]`.
    NotNull {
        /// Optional conflict resolution.
        conflict: Option<ConflictAction>,
    },
    /// `UNIQUE [conflict]`.
    Unique {
        /// Optional conflict resolution.
        conflict: Option<ConflictAction>,
    },
    /// `CHECK (expr)`.
    Check(Expr),
    /// `DEFAULT (expr | literal | signed-number)`.
    Default(Expr),
    /// `COLLATE name`.
    Collate(String),
    /// A `REFERENCES ...` foreign key clause.
    ForeignKey(ForeignKeyClause),
    /// `GENERATED [ALWAYS] AS (expr) [STORED|VIRTUAL]`.
    Generated {
        /// The expression the column is computed from.
        expr: Expr,
        /// Storage mode; `Virtual` is SQLite's default.
        kind: GeneratedKind,
    },
}

/// `[CONSTRAINT name] <kind>` attached to a single column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnConstraint {
    /// Explicit `CONSTRAINT name`, if given.
    pub name: Option<String>,
    /// The constraint itself.
    pub kind: ColumnConstraintKind,
    /// Location of the whole constraint.
    pub span: Span,
}

/// A single column definition inside `CREATE TABLE (...)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Declared type, if any (SQLite columns are optionally typed).
    pub type_name: Option<TypeName>,
    /// Column-level constraints, in source order.
    pub constraints: Vec<ColumnConstraint>,
    /// Location of the whole definition.
    pub span: Span,
}

/// The body of a table-level constraint, unqualified by its optional
/// `CONSTRAINT name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableConstraintKind {
    /// `PRIMARY KEY (indexed-cols) [conflict]`.
    PrimaryKey {
        /// The indexed columns.
        columns: Vec<IndexedColumn>,
        /// Optional conflict resolution.
        conflict: Option<ConflictAction>,
    },
    /// `UNIQUE (indexed-cols) [conflict]`.
    Unique {
        /// The indexed columns.
        columns: Vec<IndexedColumn>,
        /// Optional conflict resolution.
        conflict: Option<ConflictAction>,
    },
    /// `CHECK (expr)`.
    Check(Expr),
    /// `FOREIGN KEY (cols) <foreign-key-clause>`.
    ForeignKey {
        /// The local columns.
        columns: Vec<String>,
        /// The referencing clause.
        clause: ForeignKeyClause,
    },
}

/// `[CONSTRAINT name] <kind>` attached to the whole table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConstraint {
    /// Explicit `CONSTRAINT name`, if given.
    pub name: Option<String>,
    /// The constraint itself.
    pub kind: TableConstraintKind,
    /// Location of the whole constraint.
    pub span: Span,
}

/// Trailing `WITHOUT ROWID`/`STRICT` table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOptions {
    /// `WITHOUT ROWID` was specified.
    pub without_rowid: bool,
    /// `STRICT` was specified.
    pub strict: bool,
}
