//! Tests for diagnostics and panic-mode recovery.

mod common;
use common::*;

use sqlite_parser::diagnostic::Severity;
use sqlite_parser::parse;

#[test]
fn empty_input_parses_to_nothing() {
    let (statements, diagnostics) = parse("");
    assert!(statements.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn comments_only_input_parses_to_nothing() {
    let (statements, diagnostics) = parse("-- just a comment\n/* and a block one */");
    assert!(statements.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn incomplete_select_is_an_error() {
    let diagnostics = parse_err("SELECT");
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn unclosed_paren_is_an_error() {
    let _ = parse_err("SELECT (1 + 2");
}

#[test]
fn unterminated_string_literal_is_an_error() {
    let diagnostics = parse_err("SELECT 'unterminated");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("string literal"));
}

#[test]
fn invalid_blob_hex_is_reported_as_an_invalid_literal() {
    let diagnostics = parse_err("SELECT X'ABC';");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("blob literal"));
}

#[test]
fn unknown_leading_keyword_is_an_error() {
    let _ = parse_err("TRUNCATE t;");
}

#[test]
fn one_bad_statement_does_not_block_the_next() {
    let (statements, diagnostics) = parse("SELECT FROM; SELECT 1;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(statements.len(), 1);
}

#[test]
fn recovery_skips_to_the_next_semicolon() {
    let (statements, diagnostics) = parse("INSERT INTO; DELETE FROM t WHERE a = 1;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(statements.len(), 1);
    assert!(matches!(statements[0], sqlite_parser::ast::Statement::Delete(_)));
}

#[test]
fn recovery_does_not_infinite_loop_on_a_lone_bad_token() {
    let (statements, diagnostics) = parse(")))");
    assert!(statements.is_empty());
    assert!(!diagnostics.is_empty());
}

#[test]
fn diagnostic_snippet_points_at_the_offending_token() {
    let diagnostics = parse_err("SELECT * FROM");
    let rendered = diagnostics[0].render_snippet("SELECT * FROM");
    assert!(rendered.contains('^'));
}

#[test]
fn trigger_body_rejects_ddl_with_a_structural_violation() {
    let diagnostics = parse_err(
        "CREATE TRIGGER trg AFTER INSERT ON t BEGIN DROP TABLE t; END;",
    );
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn window_frame_rejects_unbounded_following_as_start() {
    let _ = parse_err(
        "SELECT sum(a) OVER (ORDER BY a ROWS BETWEEN UNBOUNDED FOLLOWING AND CURRENT ROW) FROM t;",
    );
}
