//! Tests for DDL: `CREATE TABLE`/`INDEX`/`VIEW`/`TRIGGER`/`VIRTUAL TABLE`,
//! `ALTER TABLE`, and `DROP`.

mod common;
use common::*;

use sqlite_parser::ast::{
    AlterTableAction, ColumnConstraintKind, CreateTableBody, DropKind, FkActionKind, Statement,
    TableConstraintKind, TriggerEvent, TriggerTiming,
};

#[test]
fn create_table_foreign_key_with_actions() {
    let stmt = parse_one(
        "CREATE TABLE orders (\
           id INTEGER PRIMARY KEY, \
           customer_id INTEGER REFERENCES customers(id) ON DELETE CASCADE ON UPDATE SET NULL\
         );",
    );
    let Statement::CreateTable(create) = stmt else {
        panic!("expected CreateTable");
    };
    let CreateTableBody::Columns { columns, .. } = create.body else {
        panic!("expected Columns body");
    };
    let ColumnConstraintKind::ForeignKey(fk) = &columns[1].constraints[0].kind else {
        panic!("expected a ForeignKey constraint");
    };
    assert_eq!(fk.table, "customers");
    assert_eq!(fk.actions.len(), 2);
    assert!(matches!(fk.actions[1].action, FkActionKind::SetNull));
}

#[test]
fn create_table_table_level_foreign_key() {
    let stmt = parse_one(
        "CREATE TABLE line_items (\
           order_id INTEGER, product_id INTEGER, \
           FOREIGN KEY (order_id) REFERENCES orders(id) DEFERRABLE INITIALLY DEFERRED\
         );",
    );
    let Statement::CreateTable(create) = stmt else {
        panic!("expected CreateTable");
    };
    let CreateTableBody::Columns { constraints, .. } = create.body else {
        panic!("expected Columns body");
    };
    let TableConstraintKind::ForeignKey { columns, clause } = &constraints[0].kind else {
        panic!("expected a ForeignKey table constraint");
    };
    assert_eq!(columns, &vec!["order_id".to_string()]);
    assert!(clause.deferrable.is_some());
}

#[test]
fn create_table_as_select() {
    let stmt = parse_one("CREATE TABLE snap AS SELECT * FROM t WHERE a > 0;");
    let Statement::CreateTable(create) = stmt else {
        panic!("expected CreateTable");
    };
    assert!(matches!(create.body, CreateTableBody::AsSelect(_)));
}

#[test]
fn create_view_with_explicit_columns() {
    let stmt = parse_one("CREATE VIEW v (a, b) AS SELECT x, y FROM t;");
    let Statement::CreateView(view) = stmt else {
        panic!("expected CreateView");
    };
    assert_eq!(view.columns, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn create_trigger_before_update_of_columns() {
    let stmt = parse_one(
        "CREATE TRIGGER trg BEFORE UPDATE OF a, b ON t \
         FOR EACH ROW WHEN old.a <> new.a BEGIN \
           UPDATE audit SET changed = 1 WHERE id = old.id; \
         END;",
    );
    let Statement::CreateTrigger(trigger) = stmt else {
        panic!("expected CreateTrigger");
    };
    assert_eq!(trigger.timing, Some(TriggerTiming::Before));
    assert!(matches!(&trigger.event, TriggerEvent::Update { columns } if columns.len() == 2));
    assert!(trigger.for_each_row);
    assert!(trigger.when_clause.is_some());
    assert_eq!(trigger.body.len(), 1);
}

#[test]
fn alter_table_rename_column() {
    let stmt = parse_one("ALTER TABLE t RENAME COLUMN old_name TO new_name;");
    let Statement::AlterTable(alter) = stmt else {
        panic!("expected AlterTable");
    };
    assert!(matches!(
        alter.action,
        AlterTableAction::RenameColumn { ref from, ref to }
            if from == "old_name" && to == "new_name"
    ));
}

#[test]
fn alter_table_drop_column() {
    let stmt = parse_one("ALTER TABLE t DROP COLUMN unused;");
    let Statement::AlterTable(alter) = stmt else {
        panic!("expected AlterTable");
    };
    assert!(matches!(alter.action, AlterTableAction::DropColumn(ref c) if c == "unused"));
}

#[test]
fn drop_index_and_view_and_trigger() {
    let Statement::Drop(d) = parse_one("DROP INDEX IF EXISTS idx_t_a;") else {
        panic!("expected Drop");
    };
    assert_eq!(d.kind, DropKind::Index);

    let Statement::Drop(d) = parse_one("DROP VIEW v;") else {
        panic!("expected Drop");
    };
    assert_eq!(d.kind, DropKind::View);

    let Statement::Drop(d) = parse_one("DROP TRIGGER trg;") else {
        panic!("expected Drop");
    };
    assert_eq!(d.kind, DropKind::Trigger);
}

#[test]
fn schema_qualified_names_everywhere() {
    let stmt = parse_one("CREATE TABLE main.t (a INTEGER);");
    let Statement::CreateTable(create) = stmt else {
        panic!("expected CreateTable");
    };
    assert_eq!(create.schema.as_deref(), Some("main"));
}
