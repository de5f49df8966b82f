//! Tests for transaction control, database management statements, and
//! `EXPLAIN`.

mod common;
use common::*;

use sqlite_parser::ast::Statement;

#[test]
fn begin_deferred_and_bare_commit() {
    let stmt = parse_one("BEGIN DEFERRED;");
    assert!(matches!(
        stmt,
        Statement::Begin(b) if b.mode == Some(sqlite_parser::ast::TransactionMode::Deferred)
    ));
    assert!(matches!(parse_one("COMMIT;"), Statement::Commit(_)));
}

#[test]
fn savepoint_and_release() {
    let Statement::Savepoint(name, _) = parse_one("SAVEPOINT sp1;") else {
        panic!("expected Savepoint");
    };
    assert_eq!(name, "sp1");
    let Statement::Release(name, _) = parse_one("RELEASE sp1;") else {
        panic!("expected Release");
    };
    assert_eq!(name, "sp1");
}

#[test]
fn rollback_without_savepoint() {
    let Statement::Rollback(rollback) = parse_one("ROLLBACK;") else {
        panic!("expected Rollback");
    };
    assert!(rollback.to_savepoint.is_none());
}

#[test]
fn reindex_with_schema_qualified_target() {
    let Statement::Reindex(Some(target), _) = parse_one("REINDEX main.idx_t_a;") else {
        panic!("expected Reindex with a target");
    };
    assert_eq!(target.schema.as_deref(), Some("main"));
    assert_eq!(target.name, "idx_t_a");
}

#[test]
fn explain_query_plan_wraps_select() {
    let Statement::Explain {
        query_plan,
        statement,
        ..
    } = parse_one("EXPLAIN QUERY PLAN SELECT * FROM t;")
    else {
        panic!("expected Explain");
    };
    assert!(query_plan);
    assert!(matches!(*statement, Statement::Select(_)));
}

#[test]
fn bare_explain_wraps_insert() {
    let Statement::Explain {
        query_plan,
        statement,
        ..
    } = parse_one("EXPLAIN INSERT INTO t (a) VALUES (1);")
    else {
        panic!("expected Explain");
    };
    assert!(!query_plan);
    assert!(matches!(*statement, Statement::Insert(_)));
}

#[test]
fn pragma_bare_query_form() {
    let Statement::Pragma(pragma) = parse_one("PRAGMA main.journal_mode;") else {
        panic!("expected Pragma");
    };
    assert_eq!(pragma.schema.as_deref(), Some("main"));
    assert!(pragma.value.is_none());
}

#[test]
fn analyze_with_table_name() {
    let Statement::Analyze(Some(target), _) = parse_one("ANALYZE t;") else {
        panic!("expected Analyze with a target");
    };
    assert_eq!(target.name, "t");
}
