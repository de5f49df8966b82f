//! Clause-level AST types shared across statements: `SELECT`'s own
//! pieces (joins, windows, ordering), plus `WITH`, `RETURNING`, and
//! upsert clauses reused by `INSERT`/`UPDATE`/`DELETE`.

use crate::span::Span;

use super::expr::Expr;
use super::schema::ConflictAction;

/// `WITH [RECURSIVE] cte (, cte)*`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct With {
    /// `RECURSIVE` was specified.
    pub recursive: bool,
    /// The common table expressions, in source order.
    pub ctes: Vec<Cte>,
}

/// `name [(cols)] [[NOT] MATERIALIZED] AS (select)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cte {
    /// The CTE's name, used to reference it from `FROM`.
    pub name: String,
    /// Explicit column names, if given.
    pub columns: Vec<String>,
    /// `Some(true)` for `MATERIALIZED`, `Some(false)` for `NOT
    /// MATERIALIZED`, `None` when unspecified.
    pub materialized: Option<bool>,
    /// The CTE's defining query.
    pub query: Box<SelectStatement>,
}

/// `DISTINCT`/`ALL` on a select-core's result columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distinctness {
    /// No modifier, or explicit `ALL`.
    #[default]
    All,
    /// `DISTINCT`.
    Distinct,
}

/// A single entry in a `SELECT`'s result-column list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectColumn {
    /// Bare `*`.
    Wildcard,
    /// `table.*`.
    TableWildcard(String),
    /// `expr [AS alias]`.
    Expr {
        /// The expression.
        expr: Expr,
        /// Optional alias (`AS` is itself optional in the grammar).
        alias: Option<String>,
    },
}

/// `[IndexedBy name | NOT INDEXED]`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Indexed {
    /// No indexing hint given.
    #[default]
    None,
    /// `INDEXED BY name`.
    IndexedBy(String),
    /// `NOT INDEXED`.
    NotIndexed,
}

/// `[schema.]table [AS alias] [indexed-hint]`, used by `UPDATE`/`DELETE`
/// and as a leaf of a `FROM` join tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedTableName {
    /// Schema qualifier, if given.
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    /// Alias, if given.
    pub alias: Option<String>,
    /// Indexing hint.
    pub indexed: Indexed,
}

/// `NATURAL? (CROSS|INNER|LEFT [OUTER]|RIGHT [OUTER]|FULL [OUTER])` or a
/// plain comma join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinKind {
    /// Implicit comma join.
    Comma,
    /// `CROSS JOIN`.
    Cross,
    /// `[INNER] JOIN`.
    Inner,
    /// `LEFT [OUTER] JOIN`.
    Left,
    /// `RIGHT [OUTER] JOIN`.
    Right,
    /// `FULL [OUTER] JOIN`.
    Full,
}

/// A join's `ON`/`USING` qualifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinConstraint {
    /// `ON expr`.
    On(Expr),
    /// `USING (col, ...)`.
    Using(Vec<String>),
}

/// A node of the `FROM` clause's left-associative join tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableExpr {
    /// An ordinary table reference.
    Table(QualifiedTableName),
    /// A table-valued function call, `name(args) [AS alias]`.
    TableFunction {
        /// Schema qualifier, if given.
        schema: Option<String>,
        /// Function name.
        name: String,
        /// Call arguments.
        args: Vec<Expr>,
        /// Alias, if given.
        alias: Option<String>,
    },
    /// `(select) [AS alias]`.
    Subquery {
        /// The subquery.
        select: Box<SelectStatement>,
        /// Alias, if given.
        alias: Option<String>,
    },
    /// A parenthesized join tree, `(join-tree)`.
    Nested(Box<TableExpr>),
    /// Two table expressions joined together.
    Join {
        /// The left (already-built) side of the join.
        left: Box<TableExpr>,
        /// Whether `NATURAL` was specified.
        natural: bool,
        /// The join kind.
        kind: JoinKind,
        /// The right side being joined in.
        right: Box<TableExpr>,
        /// The join's `ON`/`USING` qualifier, if any.
        constraint: Option<JoinConstraint>,
    },
}

/// The `FROM` clause: a single join tree (a plain comma-separated
/// `FROM a, b, c` is represented as a left-leaning chain of `Comma`
/// joins).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FromClause {
    /// The root of the join tree.
    pub root: TableExpr,
}

/// `ASC`/`DESC`, where the absence of either is distinct from `ASC`
/// (SQLite's default is ascending, but round-tripping the omission is
/// occasionally useful to a consumer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    /// No explicit direction given.
    #[default]
    Unspecified,
    /// `ASC`.
    Asc,
    /// `DESC`.
    Desc,
}

/// `NULLS FIRST`/`NULLS LAST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullsOrder {
    /// `NULLS FIRST`.
    First,
    /// `NULLS LAST`.
    Last,
}

/// A single `ORDER BY` term, also reused (without `nulls`) by indexed
/// column lists in `CREATE INDEX`/constraints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderingTerm {
    /// The sort key.
    pub expr: Expr,
    /// Optional explicit collation.
    pub collate: Option<String>,
    /// Sort direction.
    pub direction: OrderDirection,
    /// `NULLS FIRST`/`NULLS LAST`, if given.
    pub nulls: Option<NullsOrder>,
}

/// An indexed column: `expr [COLLATE name] [ASC|DESC]`, used by
/// `CREATE INDEX`, table constraints, and upsert targets. Unlike
/// [`OrderingTerm`] it never carries `NULLS FIRST/LAST`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedColumn {
    /// The indexed expression (usually a bare column reference).
    pub expr: Expr,
    /// Optional explicit collation.
    pub collate: Option<String>,
    /// Sort direction.
    pub direction: OrderDirection,
}

/// `LIMIT expr [(OFFSET|,) expr]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limit {
    /// The row-count expression.
    pub limit: Expr,
    /// The offset expression, if given.
    pub offset: Option<Expr>,
}

/// `ROWS`/`RANGE`/`GROUPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameUnit {
    /// `ROWS`
    Rows,
    /// `RANGE`
    Range,
    /// `GROUPS`
    Groups,
}

/// One end of a window frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowFrameBound {
    /// `UNBOUNDED PRECEDING` (valid only as a start).
    UnboundedPreceding,
    /// `expr PRECEDING`.
    Preceding(Box<Expr>),
    /// `CURRENT ROW`.
    CurrentRow,
    /// `expr FOLLOWING`.
    Following(Box<Expr>),
    /// `UNBOUNDED FOLLOWING` (valid only as an end).
    UnboundedFollowing,
}

/// `EXCLUDE (NO OTHERS | CURRENT ROW | GROUP | TIES)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameExclude {
    /// `EXCLUDE NO OTHERS` (the default).
    NoOthers,
    /// `EXCLUDE CURRENT ROW`.
    CurrentRow,
    /// `EXCLUDE GROUP`.
    Group,
    /// `EXCLUDE TIES`.
    Ties,
}

/// `(ROWS|RANGE|GROUPS) (bound | BETWEEN bound AND bound) [EXCLUDE ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSpec {
    /// The frame unit.
    pub unit: FrameUnit,
    /// The frame's start bound.
    pub start: WindowFrameBound,
    /// The frame's end bound, present only when `BETWEEN` was used.
    pub end: Option<WindowFrameBound>,
    /// The `EXCLUDE` clause, if given.
    pub exclude: Option<FrameExclude>,
}

/// A window definition, either named via `WINDOW name AS (...)` or
/// given inline after `OVER`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowDef {
    /// An existing named window this one extends, if any.
    pub base: Option<String>,
    /// `PARTITION BY` expressions.
    pub partition_by: Vec<Expr>,
    /// `ORDER BY` terms.
    pub order_by: Vec<OrderingTerm>,
    /// The frame clause, if given.
    pub frame: Option<FrameSpec>,
}

/// `RETURNING expr [AS alias], ...` — reuses [`SelectColumn`] since the
/// grammar is identical to a result-column list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturningClause {
    /// The returned columns.
    pub columns: Vec<SelectColumn>,
}

/// `col = expr` or `(col, ...) = expr` inside `SET`/`DO UPDATE SET`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// The assigned column(s); more than one only for the row form.
    pub columns: Vec<String>,
    /// The assigned value.
    pub value: Expr,
}

/// `ON CONFLICT (target-cols [WHERE expr])`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpsertTarget {
    /// The conflict target's indexed columns.
    pub columns: Vec<IndexedColumn>,
    /// A partial-index `WHERE` filter on the target.
    pub where_clause: Option<Expr>,
}

/// `DO NOTHING` or `DO UPDATE SET ...`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpsertAction {
    /// `DO NOTHING`.
    Nothing,
    /// `DO UPDATE SET assignments [WHERE expr]`.
    Update {
        /// The assignments to apply.
        assignments: Vec<Assignment>,
        /// An optional filter on which conflicting rows to update.
        where_clause: Option<Expr>,
    },
}

/// A single `ON CONFLICT ... DO ...` clause. `INSERT` may carry several.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpsertClause {
    /// The conflict target, absent for a bare `ON CONFLICT DO ...`.
    pub target: Option<UpsertTarget>,
    /// What to do about the conflict.
    pub action: UpsertAction,
}

/// `UNION [ALL]`, `INTERSECT`, `EXCEPT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompoundOp {
    /// `UNION`.
    Union,
    /// `UNION ALL`.
    UnionAll,
    /// `INTERSECT`.
    Intersect,
    /// `EXCEPT`.
    Except,
}

/// One `select-core`: either a `SELECT ...` or a `VALUES (...), ...`
/// row constructor. Both can appear as an arm of a compound select.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectCore {
    /// `SELECT [DISTINCT|ALL] columns [FROM ...] [WHERE ...] [GROUP BY
    /// ... [HAVING ...]] [WINDOW ...]`.
    Select {
        /// `DISTINCT`/`ALL` modifier.
        distinctness: Distinctness,
        /// Result columns.
        columns: Vec<SelectColumn>,
        /// `FROM` clause, if given.
        from: Option<FromClause>,
        /// `WHERE` filter, if given.
        where_clause: Option<Expr>,
        /// `GROUP BY` expressions.
        group_by: Vec<Expr>,
        /// `HAVING` filter, if given.
        having: Option<Expr>,
        /// Named windows declared via `WINDOW name AS (...)`.
        windows: Vec<(String, WindowDef)>,
        /// Location of the whole select-core.
        span: Span,
    },
    /// `VALUES (expr, ...), (expr, ...), ...`.
    Values(Vec<Vec<Expr>>, Span),
}

impl SelectCore {
    /// The span covering this select-core.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Select { span, .. } | Self::Values(_, span) => *span,
        }
    }
}

/// A full `SELECT` statement: an optional `WITH` prefix, one or more
/// select-cores joined by compound operators, and a trailing `ORDER
/// BY`/`LIMIT` that applies to the statement as a whole.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectStatement {
    /// `WITH [RECURSIVE] ...` prefix, if any.
    pub with: Option<With>,
    /// The first (or only) select-core.
    pub first: SelectCore,
    /// Additional cores chained by `UNION`/`UNION ALL`/`INTERSECT`/
    /// `EXCEPT`, each paired with the operator that precedes it.
    pub compounds: Vec<(CompoundOp, SelectCore)>,
    /// Statement-level `ORDER BY` terms.
    pub order_by: Vec<OrderingTerm>,
    /// Statement-level `LIMIT`/`OFFSET`.
    pub limit: Option<Limit>,
    /// Location of the whole statement.
    pub span: Span,
}

impl SelectStatement {
    /// True if this is a compound select (has at least one `UNION`/
    /// `INTERSECT`/`EXCEPT` arm beyond the first core).
    #[must_use]
    pub fn is_compound(&self) -> bool {
        !self.compounds.is_empty()
    }
}
