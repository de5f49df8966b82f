//! The canonical SQLite reserved-word table and the multi-character operator
//! lexemes. Pure data: no parsing logic lives here.

/// One of SQLite's 147 reserved words.
///
/// Keyword matching is ASCII case-insensitive; [`Keyword::from_str`] performs
/// the classification the lexer needs when it finishes scanning an unquoted
/// identifier. Quoted identifiers (`"…"`, `[…]`, `` `…` ``) never go through
/// this table — SQLite lets any keyword be used as an identifier when quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    Abort,
    Action,
    Add,
    After,
    All,
    Alter,
    Always,
    Analyze,
    And,
    As,
    Asc,
    Attach,
    Autoincrement,
    Before,
    Begin,
    Between,
    By,
    Cascade,
    Case,
    Cast,
    Check,
    Collate,
    Column,
    Commit,
    Conflict,
    Constraint,
    Create,
    Cross,
    Current,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Database,
    Default,
    Deferrable,
    Deferred,
    Delete,
    Desc,
    Detach,
    Distinct,
    Do,
    Drop,
    Each,
    Else,
    End,
    Escape,
    Except,
    Exclude,
    Exclusive,
    Exists,
    Explain,
    Fail,
    Filter,
    First,
    Following,
    For,
    Foreign,
    From,
    Full,
    Generated,
    Glob,
    Group,
    Groups,
    Having,
    If,
    Ignore,
    Immediate,
    In,
    Index,
    Indexed,
    Initially,
    Inner,
    Insert,
    Instead,
    Intersect,
    Into,
    Is,
    Isnull,
    Join,
    Key,
    Last,
    Left,
    Like,
    Limit,
    Match,
    Materialized,
    Natural,
    No,
    Not,
    Nothing,
    Notnull,
    Null,
    Nulls,
    Of,
    Offset,
    On,
    Or,
    Order,
    Others,
    Outer,
    Over,
    Partition,
    Plan,
    Pragma,
    Preceding,
    Primary,
    Query,
    Raise,
    Range,
    Recursive,
    References,
    Regexp,
    Reindex,
    Release,
    Rename,
    Replace,
    Restrict,
    Returning,
    Right,
    Rollback,
    Row,
    Rows,
    Savepoint,
    Select,
    Set,
    Table,
    Temp,
    Temporary,
    Then,
    Ties,
    To,
    Transaction,
    Trigger,
    Unbounded,
    Union,
    Unique,
    Update,
    Using,
    Vacuum,
    Values,
    View,
    Virtual,
    When,
    Where,
    Window,
    With,
    Without,

}

impl Keyword {
    /// Looks up a keyword by its text, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the 147 reserved words,
    /// which the lexer then classifies as a plain identifier.
    #[must_use]
    #[allow(clippy::should_implement_trait, clippy::too_many_lines)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ABORT" => Some(Self::Abort),
            "ACTION" => Some(Self::Action),
            "ADD" => Some(Self::Add),
            "AFTER" => Some(Self::After),
            "ALL" => Some(Self::All),
            "ALTER" => Some(Self::Alter),
            "ALWAYS" => Some(Self::Always),
            "ANALYZE" => Some(Self::Analyze),
            "AND" => Some(Self::And),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "ATTACH" => Some(Self::Attach),
            "AUTOINCREMENT" => Some(Self::Autoincrement),
            "BEFORE" => Some(Self::Before),
            "BEGIN" => Some(Self::Begin),
            "BETWEEN" => Some(Self::Between),
            "BY" => Some(Self::By),
            "CASCADE" => Some(Self::Cascade),
            "CASE" => Some(Self::Case),
            "CAST" => Some(Self::Cast),
            "CHECK" => Some(Self::Check),
            "COLLATE" => Some(Self::Collate),
            "COLUMN" => Some(Self::Column),
            "COMMIT" => Some(Self::Commit),
            "CONFLICT" => Some(Self::Conflict),
            "CONSTRAINT" => Some(Self::Constraint),
            "CREATE" => Some(Self::Create),
            "CROSS" => Some(Self::Cross),
            "CURRENT" => Some(Self::Current),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "DATABASE" => Some(Self::Database),
            "DEFAULT" => Some(Self::Default),
            "DEFERRABLE" => Some(Self::Deferrable),
            "DEFERRED" => Some(Self::Deferred),
            "DELETE" => Some(Self::Delete),
            "DESC" => Some(Self::Desc),
            "DETACH" => Some(Self::Detach),
            "DISTINCT" => Some(Self::Distinct),
            "DO" => Some(Self::Do),
            "DROP" => Some(Self::Drop),
            "EACH" => Some(Self::Each),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "ESCAPE" => Some(Self::Escape),
            "EXCEPT" => Some(Self::Except),
            "EXCLUDE" => Some(Self::Exclude),
            "EXCLUSIVE" => Some(Self::Exclusive),
            "EXISTS" => Some(Self::Exists),
            "EXPLAIN" => Some(Self::Explain),
            "FAIL" => Some(Self::Fail),
            "FILTER" => Some(Self::Filter),
            "FIRST" => Some(Self::First),
            "FOLLOWING" => Some(Self::Following),
            "FOR" => Some(Self::For),
            "FOREIGN" => Some(Self::Foreign),
            "FROM" => Some(Self::From),
            "FULL" => Some(Self::Full),
            "GENERATED" => Some(Self::Generated),
            "GLOB" => Some(Self::Glob),
            "GROUP" => Some(Self::Group),
            "GROUPS" => Some(Self::Groups),
            "HAVING" => Some(Self::Having),
            "IF" => Some(Self::If),
            "IGNORE" => Some(Self::Ignore),
            "IMMEDIATE" => Some(Self::Immediate),
            "IN" => Some(Self::In),
            "INDEX" => Some(Self::Index),
            "INDEXED" => Some(Self::Indexed),
            "INITIALLY" => Some(Self::Initially),
            "INNER" => Some(Self::Inner),
            "INSERT" => Some(Self::Insert),
            "INSTEAD" => Some(Self::Instead),
            "INTERSECT" => Some(Self::Intersect),
            "INTO" => Some(Self::Into),
            "IS" => Some(Self::Is),
            "ISNULL" => Some(Self::Isnull),
            "JOIN" => Some(Self::Join),
            "KEY" => Some(Self::Key),
            "LAST" => Some(Self::Last),
            "LEFT" => Some(Self::Left),
            "LIKE" => Some(Self::Like),
            "LIMIT" => Some(Self::Limit),
            "MATCH" => Some(Self::Match),
            "MATERIALIZED" => Some(Self::Materialized),
            "NATURAL" => Some(Self::Natural),
            "NO" => Some(Self::No),
            "NOT" => Some(Self::Not),
            "NOTHING" => Some(Self::Nothing),
            "NOTNULL" => Some(Self::Notnull),
            "NULL" => Some(Self::Null),
            "NULLS" => Some(Self::Nulls),
            "OF" => Some(Self::Of),
            "OFFSET" => Some(Self::Offset),
            "ON" => Some(Self::On),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "OTHERS" => Some(Self::Others),
            "OUTER" => Some(Self::Outer),
            "OVER" => Some(Self::Over),
            "PARTITION" => Some(Self::Partition),
            "PLAN" => Some(Self::Plan),
            "PRAGMA" => Some(Self::Pragma),
            "PRECEDING" => Some(Self::Preceding),
            "PRIMARY" => Some(Self::Primary),
            "QUERY" => Some(Self::Query),
            "RAISE" => Some(Self::Raise),
            "RANGE" => Some(Self::Range),
            "RECURSIVE" => Some(Self::Recursive),
            "REFERENCES" => Some(Self::References),
            "REGEXP" => Some(Self::Regexp),
            "REINDEX" => Some(Self::Reindex),
            "RELEASE" => Some(Self::Release),
            "RENAME" => Some(Self::Rename),
            "REPLACE" => Some(Self::Replace),
            "RESTRICT" => Some(Self::Restrict),
            "RETURNING" => Some(Self::Returning),
            "RIGHT" => Some(Self::Right),
            "ROLLBACK" => Some(Self::Rollback),
            "ROW" => Some(Self::Row),
            "ROWS" => Some(Self::Rows),
            "SAVEPOINT" => Some(Self::Savepoint),
            "SELECT" => Some(Self::Select),
            "SET" => Some(Self::Set),
            "TABLE" => Some(Self::Table),
            "TEMP" => Some(Self::Temp),
            "TEMPORARY" => Some(Self::Temporary),
            "THEN" => Some(Self::Then),
            "TIES" => Some(Self::Ties),
            "TO" => Some(Self::To),
            "TRANSACTION" => Some(Self::Transaction),
            "TRIGGER" => Some(Self::Trigger),
            "UNBOUNDED" => Some(Self::Unbounded),
            "UNION" => Some(Self::Union),
            "UNIQUE" => Some(Self::Unique),
            "UPDATE" => Some(Self::Update),
            "USING" => Some(Self::Using),
            "VACUUM" => Some(Self::Vacuum),
            "VALUES" => Some(Self::Values),
            "VIEW" => Some(Self::View),
            "VIRTUAL" => Some(Self::Virtual),
            "WHEN" => Some(Self::When),
            "WHERE" => Some(Self::Where),
            "WINDOW" => Some(Self::Window),
            "WITH" => Some(Self::With),
            "WITHOUT" => Some(Self::Without),

            _ => None,
        }
    }

    /// Returns the canonical upper-case spelling of the keyword.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "ABORT",
            Self::Action => "ACTION",
            Self::Add => "ADD",
            Self::After => "AFTER",
            Self::All => "ALL",
            Self::Alter => "ALTER",
            Self::Always => "ALWAYS",
            Self::Analyze => "ANALYZE",
            Self::And => "AND",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Attach => "ATTACH",
            Self::Autoincrement => "AUTOINCREMENT",
            Self::Before => "BEFORE",
            Self::Begin => "BEGIN",
            Self::Between => "BETWEEN",
            Self::By => "BY",
            Self::Cascade => "CASCADE",
            Self::Case => "CASE",
            Self::Cast => "CAST",
            Self::Check => "CHECK",
            Self::Collate => "COLLATE",
            Self::Column => "COLUMN",
            Self::Commit => "COMMIT",
            Self::Conflict => "CONFLICT",
            Self::Constraint => "CONSTRAINT",
            Self::Create => "CREATE",
            Self::Cross => "CROSS",
            Self::Current => "CURRENT",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::Database => "DATABASE",
            Self::Default => "DEFAULT",
            Self::Deferrable => "DEFERRABLE",
            Self::Deferred => "DEFERRED",
            Self::Delete => "DELETE",
            Self::Desc => "DESC",
            Self::Detach => "DETACH",
            Self::Distinct => "DISTINCT",
            Self::Do => "DO",
            Self::Drop => "DROP",
            Self::Each => "EACH",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Escape => "ESCAPE",
            Self::Except => "EXCEPT",
            Self::Exclude => "EXCLUDE",
            Self::Exclusive => "EXCLUSIVE",
            Self::Exists => "EXISTS",
            Self::Explain => "EXPLAIN",
            Self::Fail => "FAIL",
            Self::Filter => "FILTER",
            Self::First => "FIRST",
            Self::Following => "FOLLOWING",
            Self::For => "FOR",
            Self::Foreign => "FOREIGN",
            Self::From => "FROM",
            Self::Full => "FULL",
            Self::Generated => "GENERATED",
            Self::Glob => "GLOB",
            Self::Group => "GROUP",
            Self::Groups => "GROUPS",
            Self::Having => "HAVING",
            Self::If => "IF",
            Self::Ignore => "IGNORE",
            Self::Immediate => "IMMEDIATE",
            Self::In => "IN",
            Self::Index => "INDEX",
            Self::Indexed => "INDEXED",
            Self::Initially => "INITIALLY",
            Self::Inner => "INNER",
            Self::Insert => "INSERT",
            Self::Instead => "INSTEAD",
            Self::Intersect => "INTERSECT",
            Self::Into => "INTO",
            Self::Is => "IS",
            Self::Isnull => "ISNULL",
            Self::Join => "JOIN",
            Self::Key => "KEY",
            Self::Last => "LAST",
            Self::Left => "LEFT",
            Self::Like => "LIKE",
            Self::Limit => "LIMIT",
            Self::Match => "MATCH",
            Self::Materialized => "MATERIALIZED",
            Self::Natural => "NATURAL",
            Self::No => "NO",
            Self::Not => "NOT",
            Self::Nothing => "NOTHING",
            Self::Notnull => "NOTNULL",
            Self::Null => "NULL",
            Self::Nulls => "NULLS",
            Self::Of => "OF",
            Self::Offset => "OFFSET",
            Self::On => "ON",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Others => "OTHERS",
            Self::Outer => "OUTER",
            Self::Over => "OVER",
            Self::Partition => "PARTITION",
            Self::Plan => "PLAN",
            Self::Pragma => "PRAGMA",
            Self::Preceding => "PRECEDING",
            Self::Primary => "PRIMARY",
            Self::Query => "QUERY",
            Self::Raise => "RAISE",
            Self::Range => "RANGE",
            Self::Recursive => "RECURSIVE",
            Self::References => "REFERENCES",
            Self::Regexp => "REGEXP",
            Self::Reindex => "REINDEX",
            Self::Release => "RELEASE",
            Self::Rename => "RENAME",
            Self::Replace => "REPLACE",
            Self::Restrict => "RESTRICT",
            Self::Returning => "RETURNING",
            Self::Right => "RIGHT",
            Self::Rollback => "ROLLBACK",
            Self::Row => "ROW",
            Self::Rows => "ROWS",
            Self::Savepoint => "SAVEPOINT",
            Self::Select => "SELECT",
            Self::Set => "SET",
            Self::Table => "TABLE",
            Self::Temp => "TEMP",
            Self::Temporary => "TEMPORARY",
            Self::Then => "THEN",
            Self::Ties => "TIES",
            Self::To => "TO",
            Self::Transaction => "TRANSACTION",
            Self::Trigger => "TRIGGER",
            Self::Unbounded => "UNBOUNDED",
            Self::Union => "UNION",
            Self::Unique => "UNIQUE",
            Self::Update => "UPDATE",
            Self::Using => "USING",
            Self::Vacuum => "VACUUM",
            Self::Values => "VALUES",
            Self::View => "VIEW",
            Self::Virtual => "VIRTUAL",
            Self::When => "WHEN",
            Self::Where => "WHERE",
            Self::Window => "WINDOW",
            Self::With => "WITH",
            Self::Without => "WITHOUT",
        }
    }

    /// Keywords that SQLite documents as non-reserved, i.e. usable unquoted
    /// as a table, column, or index name because the grammar never needs
    /// them at the start of an expression or statement in a way that would
    /// conflict with an identifier in that position.
    ///
    /// This parser does not special-case these in the lexer (a keyword
    /// token is always produced), but statement/clause parsers that accept
    /// an identifier consult this to decide whether an unquoted keyword may
    /// stand in for a name — e.g. a column literally named `key` or `action`.
    #[must_use]
    pub const fn is_bare_word_friendly(self) -> bool {
        matches!(
            self,
            Self::Action
                | Self::After
                | Self::Before
                | Self::Cascade
                | Self::Conflict
                | Self::Database
                | Self::Deferred
                | Self::End
                | Self::Each
                | Self::Fail
                | Self::For
                | Self::Ignore
                | Self::Immediate
                | Self::Initially
                | Self::Instead
                | Self::Key
                | Self::No
                | Self::Of
                | Self::Plan
                | Self::Query
                | Self::Raise
                | Self::Replace
                | Self::Restrict
                | Self::Row
                | Self::Temp
                | Self::Temporary
                | Self::Trigger
                | Self::View
                | Self::Virtual
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_insensitive() {
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
    }

    #[test]
    fn non_keyword_returns_none() {
        assert_eq!(Keyword::from_str("my_column"), None);
        assert_eq!(Keyword::from_str(""), None);
    }

    #[test]
    fn round_trips_through_as_str() {
        for kw in [
            Keyword::Select,
            Keyword::With,
            Keyword::Recursive,
            Keyword::Returning,
            Keyword::Generated,
            Keyword::Without,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn reserved_word_count_is_147() {
        let all = [
            "ABORT", "ACTION", "ADD", "AFTER", "ALL", "ALTER", "ALWAYS", "ANALYZE", "AND", "AS",
            "ASC", "ATTACH", "AUTOINCREMENT", "BEFORE", "BEGIN", "BETWEEN", "BY", "CASCADE",
            "CASE", "CAST", "CHECK", "COLLATE", "COLUMN", "COMMIT", "CONFLICT", "CONSTRAINT",
            "CREATE", "CROSS", "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
            "DATABASE", "DEFAULT", "DEFERRABLE", "DEFERRED", "DELETE", "DESC", "DETACH",
            "DISTINCT", "DO", "DROP", "EACH", "ELSE", "END", "ESCAPE", "EXCEPT", "EXCLUDE",
            "EXCLUSIVE", "EXISTS", "EXPLAIN", "FAIL", "FILTER", "FIRST", "FOLLOWING", "FOR",
            "FOREIGN", "FROM", "FULL", "GENERATED", "GLOB", "GROUP", "GROUPS", "HAVING", "IF",
            "IGNORE", "IMMEDIATE", "IN", "INDEX", "INDEXED", "INITIALLY", "INNER", "INSERT",
            "INSTEAD", "INTERSECT", "INTO", "IS", "ISNULL", "JOIN", "KEY", "LAST", "LEFT",
            "LIKE", "LIMIT", "MATCH", "MATERIALIZED", "NATURAL", "NO", "NOT", "NOTHING",
            "NOTNULL", "NULL", "NULLS", "OF", "OFFSET", "ON", "OR", "ORDER", "OTHERS", "OUTER",
            "OVER", "PARTITION", "PLAN", "PRAGMA", "PRECEDING", "PRIMARY", "QUERY", "RAISE",
            "RANGE", "RECURSIVE", "REFERENCES", "REGEXP", "REINDEX", "RELEASE", "RENAME",
            "REPLACE", "RESTRICT", "RETURNING", "RIGHT", "ROLLBACK", "ROW", "ROWS", "SAVEPOINT",
            "SELECT", "SET", "TABLE", "TEMP", "TEMPORARY", "THEN", "TIES", "TO", "TRANSACTION",
            "TRIGGER", "UNBOUNDED", "UNION", "UNIQUE", "UPDATE", "USING", "VACUUM", "VALUES",
            "VIEW", "VIRTUAL", "WHEN", "WHERE", "WINDOW", "WITH", "WITHOUT",
        ];
        assert_eq!(all.len(), 147);
        for w in all {
            assert!(Keyword::from_str(w).is_some(), "missing keyword {w}");
        }
    }
}
