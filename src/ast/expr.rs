//! Expression AST types.

use crate::lexer::ParameterKind;
use crate::span::Span;

use super::clause::{OrderingTerm, SelectStatement, WindowDef};
use super::schema::TypeName;

/// A literal value, carrying its already-decoded payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Numeric literal, raw source text (lexer does not interpret it).
    Number(String),
    /// String literal, quotes stripped and `''` escapes resolved.
    String(String),
    /// Blob literal, decoded to bytes.
    Blob(Vec<u8>),
    /// `NULL`.
    Null,
    /// A boolean literal (`TRUE`/`FALSE`, accepted as aliases for 1/0).
    Boolean(bool),
    /// `CURRENT_TIME`.
    CurrentTime,
    /// `CURRENT_DATE`.
    CurrentDate,
    /// `CURRENT_TIMESTAMP`.
    CurrentTimestamp,
}

/// Binary operators, ordered by nothing in particular — precedence lives
/// in [`crate::parser::precedence`], not on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `=` / `==`
    Eq,
    /// `!=` / `<>`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `||`
    Concat,
    /// `->` (JSON extract, rendering to text)
    Arrow,
    /// `->>` (JSON extract, rendering to SQL value)
    Arrow2,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
}

impl BinaryOp {
    /// The operator's SQL spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::Arrow => "->",
            Self::Arrow2 => "->>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x` (a no-op at the value level, kept for round-trip fidelity)
    Plus,
    /// `NOT x`
    Not,
    /// `~x`
    BitNot,
}

/// `LIKE`/`GLOB`/`MATCH`/`REGEXP` all share one grammar shape (operand,
/// optional `ESCAPE`, negatable) and differ only in which keyword
/// introduced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOp {
    /// `LIKE`
    Like,
    /// `GLOB`
    Glob,
    /// `MATCH`
    Match,
    /// `REGEXP`
    Regexp,
}

/// The right-hand side of an `IN` / `NOT IN` expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InSource {
    /// `IN (expr, expr, ...)`
    List(Vec<Expr>),
    /// `IN (SELECT ...)`
    Subquery(Box<SelectStatement>),
    /// `IN table_name(args...)` / `IN schema.table`
    Table {
        /// Schema qualifier, if given.
        schema: Option<String>,
        /// Table (or table-valued function) name.
        name: String,
        /// Table-valued function arguments, if any.
        args: Vec<Expr>,
    },
}

/// A window reference attached to a function call via `OVER`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowSpec {
    /// `OVER window_name`
    Named(String),
    /// `OVER (...)`
    Inline(WindowDef),
}

/// `RAISE(...)`, valid only inside trigger bodies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaiseAction {
    /// `RAISE(IGNORE)`
    Ignore,
    /// `RAISE(ROLLBACK, message)`
    Rollback(String),
    /// `RAISE(ABORT, message)`
    Abort(String),
    /// `RAISE(FAIL, message)`
    Fail(String),
}

/// Function call arguments: either `*` (only valid for a handful of
/// aggregates like `count(*)`) or an ordinary expression list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionArgs {
    /// `f(*)`
    Wildcard,
    /// `f(a, b, ...)`, `f()` is `List(vec![])`.
    List(Vec<Expr>),
}

/// A function call, with its optional `DISTINCT`, `FILTER`, and `OVER`
/// modifiers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    /// Function name (case preserved as written).
    pub name: String,
    /// The argument list.
    pub args: FunctionArgs,
    /// Whether `DISTINCT` preceded the arguments.
    pub distinct: bool,
    /// `FILTER (WHERE expr)`.
    pub filter: Option<Box<Expr>>,
    /// `OVER ...`. Invariant: mutually exclusive with `distinct == true`.
    pub over: Option<WindowSpec>,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal, Span),
    /// A bare column or table-alias reference.
    Identifier(String, Span),
    /// A `schema.table.column`-style reference (2 or 3 parts).
    QualifiedIdentifier(Vec<String>, Span),
    /// A bind parameter.
    Parameter(ParameterKind, Span),
    /// `*` or `table.*` in contexts where an expression is expected
    /// (result columns use [`super::clause::SelectColumn`] instead; this
    /// variant exists for `count(*)`-style argument positions).
    Wildcard {
        /// Table qualifier, for `table.*`.
        table: Option<String>,
        /// Location.
        span: Span,
    },
    /// A unary operator applied to an operand.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
        /// Location of the whole expression.
        span: Span,
    },
    /// A binary operator applied to two operands.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// The operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
        /// Location of the whole expression.
        span: Span,
    },
    /// `expr [NOT] BETWEEN low AND high`. `low`/`high` never contain a
    /// top-level `AND` — the parser enforces this by parsing them at a
    /// precedence above `AND`.
    Between {
        /// The value being tested.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// `NOT BETWEEN` when true.
        negated: bool,
        /// Location of the whole expression.
        span: Span,
    },
    /// `expr [NOT] IN (...)`.
    In {
        /// The value being tested.
        expr: Box<Expr>,
        /// The right-hand side.
        source: InSource,
        /// `NOT IN` when true.
        negated: bool,
        /// Location of the whole expression.
        span: Span,
    },
    /// `expr [NOT] LIKE/GLOB/MATCH/REGEXP pattern [ESCAPE escape]`.
    Match {
        /// The value being tested.
        expr: Box<Expr>,
        /// Which of the four match operators.
        op: MatchOp,
        /// The pattern operand.
        pattern: Box<Expr>,
        /// `ESCAPE` clause, `LIKE` only.
        escape: Option<Box<Expr>>,
        /// `NOT ...` when true.
        negated: bool,
        /// Location of the whole expression.
        span: Span,
    },
    /// `expr IS [NOT] [DISTINCT FROM] expr`.
    Is {
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
        /// `IS NOT` when true.
        negated: bool,
        /// Whether `DISTINCT FROM` was used instead of bare `IS`.
        distinct: bool,
        /// Location of the whole expression.
        span: Span,
    },
    /// `expr IS [NOT] NULL` / `expr ISNULL` / `expr NOTNULL`.
    IsNull {
        /// The value being tested.
        expr: Box<Expr>,
        /// True for `IS NOT NULL` / `NOTNULL`.
        negated: bool,
        /// Location of the whole expression.
        span: Span,
    },
    /// `CASE [operand] WHEN ... THEN ... [ELSE ...] END`.
    Case {
        /// The operand being compared, for simple-form `CASE`.
        operand: Option<Box<Expr>>,
        /// `WHEN cond THEN result` arms, in source order.
        when_then: Vec<(Expr, Expr)>,
        /// `ELSE` result.
        else_branch: Option<Box<Expr>>,
        /// Location of the whole expression.
        span: Span,
    },
    /// `CAST(expr AS type_name)`.
    Cast {
        /// The expression being cast.
        expr: Box<Expr>,
        /// The target type.
        type_name: TypeName,
        /// Location of the whole expression.
        span: Span,
    },
    /// `expr COLLATE name`, postfix, binds tighter than any binary op.
    Collate {
        /// The operand.
        expr: Box<Expr>,
        /// Collation name.
        collation: String,
        /// Location of the whole expression.
        span: Span,
    },
    /// `[NOT] EXISTS (SELECT ...)`.
    Exists {
        /// The subquery.
        subquery: Box<SelectStatement>,
        /// `NOT EXISTS` when true.
        negated: bool,
        /// Location of the whole expression.
        span: Span,
    },
    /// `(SELECT ...)` used as a scalar/row expression.
    Subquery(Box<SelectStatement>, Span),
    /// A parenthesized expression, kept distinct from its inner
    /// expression so re-emission could preserve the parentheses.
    Paren(Box<Expr>, Span),
    /// A function call.
    Function(FunctionCall, Span),
    /// `RAISE(...)`, trigger bodies only.
    Raise(RaiseAction, Span),
}

impl Expr {
    /// The span covering this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(_, s)
            | Self::Identifier(_, s)
            | Self::QualifiedIdentifier(_, s)
            | Self::Parameter(_, s)
            | Self::Wildcard { span: s, .. }
            | Self::Unary { span: s, .. }
            | Self::Binary { span: s, .. }
            | Self::Between { span: s, .. }
            | Self::In { span: s, .. }
            | Self::Match { span: s, .. }
            | Self::Is { span: s, .. }
            | Self::IsNull { span: s, .. }
            | Self::Case { span: s, .. }
            | Self::Cast { span: s, .. }
            | Self::Collate { span: s, .. }
            | Self::Exists { span: s, .. }
            | Self::Subquery(_, s)
            | Self::Paren(_, s)
            | Self::Function(_, s)
            | Self::Raise(_, s) => *s,
        }
    }
}
