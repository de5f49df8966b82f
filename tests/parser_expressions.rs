//! Tests for expression parsing: operator precedence, and the
//! special-form expressions (`BETWEEN`, `IN`, `LIKE`-family, `CASE`,
//! `CAST`, `IS [NOT] [DISTINCT FROM]`, `EXISTS`, `RAISE`).

mod common;
use common::*;

use sqlite_parser::ast::{
    BinaryOp, Expr, InSource, Literal, MatchOp, SelectColumn, SelectCore, UnaryOp,
};

fn first_expr(sql: &str) -> Expr {
    let select = parse_select(sql);
    let SelectCore::Select { columns, .. } = select.first else {
        panic!("expected a Select core");
    };
    let SelectColumn::Expr { expr, .. } = columns.into_iter().next().unwrap() else {
        panic!("expected an expr column");
    };
    expr
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = first_expr("SELECT 1 + 2 * 3;");
    let Expr::Binary { op: BinaryOp::Add, right, .. } = expr else {
        panic!("expected a top-level Add");
    };
    assert!(matches!(*right, Expr::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    let expr = first_expr("SELECT 1 + 2 > 3 - 1;");
    assert!(matches!(expr, Expr::Binary { op: BinaryOp::Gt, .. }));
}

#[test]
fn and_binds_tighter_than_or() {
    let expr = first_expr("SELECT true OR false AND true;");
    let Expr::Binary { op: BinaryOp::Or, right, .. } = expr else {
        panic!("expected a top-level Or");
    };
    assert!(matches!(*right, Expr::Binary { op: BinaryOp::And, .. }));
}

#[test]
fn unary_minus_and_not() {
    let expr = first_expr("SELECT -1;");
    assert!(matches!(expr, Expr::Unary { op: UnaryOp::Neg, .. }));
    let expr = first_expr("SELECT NOT 1;");
    assert!(matches!(expr, Expr::Unary { op: UnaryOp::Not, .. }));
}

#[test]
fn concat_is_left_associative() {
    let expr = first_expr("SELECT 'a' || 'b' || 'c';");
    let Expr::Binary { op: BinaryOp::Concat, left, .. } = expr else {
        panic!("expected a top-level Concat");
    };
    assert!(matches!(*left, Expr::Binary { op: BinaryOp::Concat, .. }));
}

#[test]
fn between_low_high_never_swallow_and() {
    let expr = first_expr("SELECT a BETWEEN 1 AND 10 AND b = 1;");
    let Expr::Binary { op: BinaryOp::And, left, .. } = expr else {
        panic!("expected the outer AND");
    };
    assert!(matches!(*left, Expr::Between { negated: false, .. }));
}

#[test]
fn not_between() {
    let expr = first_expr("SELECT a NOT BETWEEN 1 AND 10;");
    assert!(matches!(expr, Expr::Between { negated: true, .. }));
}

#[test]
fn in_list_and_in_subquery_and_in_table() {
    assert!(matches!(
        first_expr("SELECT a IN (1, 2, 3);"),
        Expr::In { source: InSource::List(ref v), .. } if v.len() == 3
    ));
    assert!(matches!(
        first_expr("SELECT a IN (SELECT id FROM t);"),
        Expr::In { source: InSource::Subquery(_), .. }
    ));
    assert!(matches!(
        first_expr("SELECT a NOT IN other_table;"),
        Expr::In { source: InSource::Table { ref name, .. }, negated: true, .. } if name == "other_table"
    ));
}

#[test]
fn like_with_escape() {
    let expr = first_expr("SELECT a LIKE '%x!%%' ESCAPE '!';");
    let Expr::Match { op, escape, negated, .. } = expr else {
        panic!("expected a Match expression");
    };
    assert_eq!(op, MatchOp::Like);
    assert!(escape.is_some());
    assert!(!negated);
}

#[test]
fn glob_match_regexp_operators() {
    assert!(matches!(
        first_expr("SELECT a GLOB '*.txt';"),
        Expr::Match { op: MatchOp::Glob, .. }
    ));
    assert!(matches!(
        first_expr("SELECT a MATCH 'pattern';"),
        Expr::Match { op: MatchOp::Match, .. }
    ));
    assert!(matches!(
        first_expr("SELECT a REGEXP '^[a-z]+$';"),
        Expr::Match { op: MatchOp::Regexp, .. }
    ));
}

#[test]
fn is_distinct_from() {
    let expr = first_expr("SELECT a IS DISTINCT FROM b;");
    assert!(matches!(expr, Expr::Is { distinct: true, negated: false, .. }));
    let expr = first_expr("SELECT a IS NOT DISTINCT FROM b;");
    assert!(matches!(expr, Expr::Is { distinct: true, negated: true, .. }));
}

#[test]
fn isnull_and_notnull_shorthand() {
    assert!(matches!(first_expr("SELECT a ISNULL;"), Expr::IsNull { negated: false, .. }));
    assert!(matches!(first_expr("SELECT a NOTNULL;"), Expr::IsNull { negated: true, .. }));
}

#[test]
fn simple_and_searched_case() {
    let expr = first_expr("SELECT CASE a WHEN 1 THEN 'one' ELSE 'other' END;");
    let Expr::Case { operand, when_then, else_branch, .. } = expr else {
        panic!("expected a Case expression");
    };
    assert!(operand.is_some());
    assert_eq!(when_then.len(), 1);
    assert!(else_branch.is_some());

    let expr = first_expr("SELECT CASE WHEN a > 0 THEN 'pos' WHEN a < 0 THEN 'neg' END;");
    let Expr::Case { operand, when_then, else_branch, .. } = expr else {
        panic!("expected a Case expression");
    };
    assert!(operand.is_none());
    assert_eq!(when_then.len(), 2);
    assert!(else_branch.is_none());
}

#[test]
fn cast_expression() {
    let expr = first_expr("SELECT CAST(a AS VARCHAR(10));");
    let Expr::Cast { type_name, .. } = expr else {
        panic!("expected a Cast expression");
    };
    assert_eq!(type_name.name, "VARCHAR");
    assert_eq!(type_name.size, Some((10, None)));
}

#[test]
fn collate_binds_tighter_than_binary_ops() {
    let expr = first_expr("SELECT a = b COLLATE nocase;");
    let Expr::Binary { op: BinaryOp::Eq, right, .. } = expr else {
        panic!("expected a top-level Eq");
    };
    assert!(matches!(*right, Expr::Collate { .. }));
}

#[test]
fn exists_and_not_exists() {
    assert!(matches!(
        first_expr("SELECT EXISTS (SELECT 1 FROM t);"),
        Expr::Exists { negated: false, .. }
    ));
    assert!(matches!(
        first_expr("SELECT NOT EXISTS (SELECT 1 FROM t);"),
        Expr::Exists { negated: true, .. }
    ));
}

#[test]
fn function_call_with_distinct_and_filter() {
    let expr = first_expr("SELECT count(DISTINCT a) FILTER (WHERE a IS NOT NULL);");
    let Expr::Function(call, _) = expr else {
        panic!("expected a Function expression");
    };
    assert!(call.distinct);
    assert!(call.filter.is_some());
    assert!(call.over.is_none());
}

#[test]
fn count_star_uses_wildcard_args() {
    let expr = first_expr("SELECT count(*);");
    let Expr::Function(call, _) = expr else {
        panic!("expected a Function expression");
    };
    assert!(matches!(call.args, sqlite_parser::ast::FunctionArgs::Wildcard));
}

#[test]
fn literal_kinds() {
    assert!(matches!(first_expr("SELECT NULL;"), Expr::Literal(Literal::Null, _)));
    assert!(matches!(first_expr("SELECT 1.5e10;"), Expr::Literal(Literal::Number(_), _)));
    assert!(matches!(
        first_expr("SELECT x'4142';"),
        Expr::Literal(Literal::Blob(ref b), _) if b.as_slice() == b"AB"
    ));
    assert!(matches!(
        first_expr("SELECT CURRENT_TIMESTAMP;"),
        Expr::Literal(Literal::CurrentTimestamp, _)
    ));
}

#[test]
fn raise_inside_trigger_body() {
    let stmt = parse_one(
        "CREATE TRIGGER trg BEFORE DELETE ON t BEGIN \
           SELECT RAISE(ABORT, 'no deletes'); \
         END;",
    );
    let sqlite_parser::ast::Statement::CreateTrigger(trigger) = stmt else {
        panic!("expected CreateTrigger");
    };
    let sqlite_parser::ast::Statement::Select(select) = &trigger.body[0] else {
        panic!("expected a Select body statement");
    };
    let SelectCore::Select { columns, .. } = &select.first else {
        panic!("expected a Select core");
    };
    assert!(matches!(columns[0], SelectColumn::Expr { expr: Expr::Raise(_, _), .. }));
}
