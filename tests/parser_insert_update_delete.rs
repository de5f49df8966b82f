//! Tests for `INSERT`/`UPDATE`/`DELETE`, including the `ON CONFLICT`
//! upsert clause they share.

mod common;
use common::*;

use sqlite_parser::ast::{ConflictAction, InsertSource, UpsertAction};

#[test]
fn insert_values_multiple_rows() {
    let insert = parse_insert("INSERT INTO t (a, b) VALUES (1, 2), (3, 4);");
    assert_eq!(insert.columns, vec!["a".to_string(), "b".to_string()]);
    let InsertSource::Values(rows) = &insert.source else {
        panic!("expected Values source");
    };
    assert_eq!(rows.len(), 2);
}

#[test]
fn insert_select_source() {
    let insert = parse_insert("INSERT INTO t SELECT a, b FROM src WHERE a > 0;");
    assert!(matches!(insert.source, InsertSource::Select(_)));
}

#[test]
fn insert_or_abort_conflict_action() {
    let insert = parse_insert("INSERT OR ABORT INTO t (a) VALUES (1);");
    assert_eq!(insert.or_action, Some(ConflictAction::Abort));
}

#[test]
fn upsert_with_target_and_where() {
    let insert = parse_insert(
        "INSERT INTO t (a, b) VALUES (1, 2) \
         ON CONFLICT (a) WHERE a > 0 DO UPDATE SET b = excluded.b WHERE b < 100;",
    );
    let upsert = &insert.upserts[0];
    let target = upsert.target.as_ref().unwrap();
    assert_eq!(target.columns.len(), 1);
    assert!(target.where_clause.is_some());
    let UpsertAction::Update { where_clause, .. } = &upsert.action else {
        panic!("expected DO UPDATE");
    };
    assert!(where_clause.is_some());
}

#[test]
fn insert_with_table_alias() {
    let insert = parse_insert("INSERT INTO t AS tgt (a) VALUES (1);");
    assert_eq!(insert.alias.as_deref(), Some("tgt"));
}

#[test]
fn update_set_row_value() {
    let update = parse_update("UPDATE t SET (a, b) = (1, 2) WHERE id = 5;");
    assert_eq!(update.assignments[0].columns.len(), 2);
}

#[test]
fn update_or_rollback() {
    let update = parse_update("UPDATE OR ROLLBACK t SET a = 1;");
    assert_eq!(update.or_action, Some(ConflictAction::Rollback));
}

#[test]
fn update_indexed_by_target_table() {
    let update = parse_update("UPDATE t INDEXED BY idx_t_a SET a = 1 WHERE a = 2;");
    assert!(matches!(
        update.table.indexed,
        sqlite_parser::ast::Indexed::IndexedBy(ref name) if name == "idx_t_a"
    ));
}

#[test]
fn delete_not_indexed_target() {
    let delete = parse_delete("DELETE FROM t NOT INDEXED WHERE a = 1;");
    assert!(matches!(
        delete.table.indexed,
        sqlite_parser::ast::Indexed::NotIndexed
    ));
}

#[test]
fn delete_all_rows() {
    let delete = parse_delete("DELETE FROM t;");
    assert!(delete.where_clause.is_none());
    assert!(delete.returning.is_none());
}

#[test]
fn with_prefixed_update() {
    let update = match sqlite_parser::parse(
        "WITH src AS (SELECT id FROM staging) \
         UPDATE t SET a = 1 FROM src WHERE t.id = src.id;",
    ) {
        (mut statements, diagnostics) if diagnostics.is_empty() && statements.len() == 1 => {
            match statements.remove(0) {
                sqlite_parser::ast::Statement::Update(u) => u,
                other => panic!("expected UPDATE, got {other:?}"),
            }
        }
        other => panic!("unexpected parse result: {other:?}"),
    };
    assert!(update.with.is_some());
    assert!(update.from.is_some());
}
