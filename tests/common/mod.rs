#![allow(dead_code)]

use sqlite_parser::ast::{
    DeleteStatement, InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use sqlite_parser::diagnostic::Diagnostic;
use sqlite_parser::parse;

/// Parses `source` and asserts it produced exactly one statement with no
/// diagnostics.
pub fn parse_one(source: &str) -> Statement {
    let (statements, diagnostics) = parse(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {diagnostics:?}"
    );
    assert_eq!(statements.len(), 1, "expected exactly one statement from {source:?}");
    statements.into_iter().next().unwrap()
}

/// Parses `source` and returns its diagnostics, asserting at least one was
/// raised.
pub fn parse_err(source: &str) -> Vec<Diagnostic> {
    let (_statements, diagnostics) = parse(source);
    assert!(!diagnostics.is_empty(), "expected a diagnostic for {source:?}");
    diagnostics
}

pub fn parse_select(source: &str) -> SelectStatement {
    match parse_one(source) {
        Statement::Select(s) => s,
        other => panic!("expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(source: &str) -> InsertStatement {
    match parse_one(source) {
        Statement::Insert(s) => s,
        other => panic!("expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(source: &str) -> UpdateStatement {
    match parse_one(source) {
        Statement::Update(s) => s,
        other => panic!("expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(source: &str) -> DeleteStatement {
    match parse_one(source) {
        Statement::Delete(s) => s,
        other => panic!("expected DELETE, got {other:?}"),
    }
}
