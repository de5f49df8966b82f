//! Tests for `SELECT`: joins, compounds, CTEs, and window functions.

mod common;
use common::*;

use sqlite_parser::ast::{
    CompoundOp, Expr, JoinConstraint, JoinKind, SelectColumn, SelectCore, TableExpr,
};

#[test]
fn star_from_single_table() {
    let select = parse_select("SELECT * FROM users;");
    let SelectCore::Select { columns, from, .. } = &select.first else {
        panic!("expected a Select core");
    };
    assert_eq!(columns.len(), 1);
    assert!(matches!(columns[0], SelectColumn::Wildcard));
    assert!(matches!(
        from.as_ref().unwrap().root,
        TableExpr::Table(ref t) if t.name == "users"
    ));
}

#[test]
fn qualified_wildcard_and_aliases() {
    let select = parse_select("SELECT u.*, o.id AS order_id FROM users u, orders o;");
    let SelectCore::Select { columns, .. } = &select.first else {
        panic!("expected a Select core");
    };
    assert!(matches!(columns[0], SelectColumn::TableWildcard(ref t) if t == "u"));
    assert!(matches!(
        &columns[1],
        SelectColumn::Expr { alias: Some(a), .. } if a == "order_id"
    ));
}

#[test]
fn inner_left_and_natural_joins() {
    let select = parse_select(
        "SELECT * FROM a JOIN b ON a.id = b.a_id \
         LEFT OUTER JOIN c ON c.b_id = b.id \
         NATURAL CROSS JOIN d;",
    );
    let SelectCore::Select { from, .. } = &select.first else {
        panic!("expected a Select core");
    };
    let TableExpr::Join { kind, natural, right, .. } = &from.as_ref().unwrap().root else {
        panic!("expected outermost Join");
    };
    assert_eq!(*kind, JoinKind::Cross);
    assert!(natural);
    assert!(matches!(**right, TableExpr::Table(ref t) if t.name == "d"));
}

#[test]
fn join_using_clause() {
    let select = parse_select("SELECT * FROM a JOIN b USING (id, kind);");
    let SelectCore::Select { from, .. } = &select.first else {
        panic!("expected a Select core");
    };
    let TableExpr::Join { constraint, .. } = &from.as_ref().unwrap().root else {
        panic!("expected Join");
    };
    assert!(matches!(
        constraint,
        Some(JoinConstraint::Using(cols)) if cols == &vec!["id".to_string(), "kind".to_string()]
    ));
}

#[test]
fn subquery_in_from_with_alias() {
    let select = parse_select("SELECT * FROM (SELECT id FROM t) AS sub;");
    let SelectCore::Select { from, .. } = &select.first else {
        panic!("expected a Select core");
    };
    assert!(matches!(
        &from.as_ref().unwrap().root,
        TableExpr::Subquery { alias: Some(a), .. } if a == "sub"
    ));
}

#[test]
fn table_valued_function_in_from() {
    let select = parse_select("SELECT * FROM generate_series(1, 10) AS g;");
    let SelectCore::Select { from, .. } = &select.first else {
        panic!("expected a Select core");
    };
    assert!(matches!(
        &from.as_ref().unwrap().root,
        TableExpr::TableFunction { name, args, .. } if name == "generate_series" && args.len() == 2
    ));
}

#[test]
fn group_by_having_and_where() {
    let select = parse_select(
        "SELECT status, COUNT(*) FROM orders WHERE active = 1 \
         GROUP BY status HAVING COUNT(*) > 5;",
    );
    let SelectCore::Select {
        where_clause,
        group_by,
        having,
        ..
    } = &select.first
    else {
        panic!("expected a Select core");
    };
    assert!(where_clause.is_some());
    assert_eq!(group_by.len(), 1);
    assert!(having.is_some());
}

#[test]
fn compound_union_all_and_order_limit() {
    let select = parse_select(
        "SELECT a FROM t1 UNION ALL SELECT a FROM t2 ORDER BY a DESC LIMIT 10 OFFSET 5;",
    );
    assert_eq!(select.compounds.len(), 1);
    assert_eq!(select.compounds[0].0, CompoundOp::UnionAll);
    assert_eq!(select.order_by.len(), 1);
    let limit = select.limit.as_ref().unwrap();
    assert!(limit.offset.is_some());
}

#[test]
fn recursive_cte_feeds_select() {
    let select = parse_select(
        "WITH RECURSIVE counter(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM counter WHERE n < 5) \
         SELECT n FROM counter;",
    );
    let with = select.with.as_ref().unwrap();
    assert!(with.recursive);
    assert_eq!(with.ctes.len(), 1);
    assert_eq!(with.ctes[0].name, "counter");
    assert!(with.ctes[0].query.is_compound());
}

#[test]
fn window_function_with_partition_order_and_frame() {
    let select = parse_select(
        "SELECT row_number() OVER (PARTITION BY dept ORDER BY salary DESC \
         ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW) FROM employees;",
    );
    let SelectCore::Select { columns, .. } = &select.first else {
        panic!("expected a Select core");
    };
    let SelectColumn::Expr { expr, .. } = &columns[0] else {
        panic!("expected an expr column");
    };
    let Expr::Function(call, _) = expr else {
        panic!("expected a function call");
    };
    assert!(call.over.is_some());
}

#[test]
fn named_window_clause() {
    let select = parse_select(
        "SELECT sum(amount) OVER w FROM sales \
         WINDOW w AS (PARTITION BY region ORDER BY day);",
    );
    let SelectCore::Select { windows, .. } = &select.first else {
        panic!("expected a Select core");
    };
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].0, "w");
}

#[test]
fn values_as_select_core() {
    let select = parse_select("VALUES (1, 2), (3, 4);");
    let SelectCore::Values(rows, _) = &select.first else {
        panic!("expected a Values core");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 2);
}
