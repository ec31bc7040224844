// lispy-core - Error message integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The exact wording of user-visible errors. The REPL prefixes these with
//! `Error: `, so the texts here are what users read.

mod common;

use common::eval_str;

fn error_of(code: &str) -> String {
    eval_str(code).expect_err("expected an error")
}

#[test]
fn test_unbound_symbol() {
    assert_eq!(error_of("y"), "Unbound symbol 'y'");
}

#[test]
fn test_not_callable() {
    assert_eq!(error_of("(1 2 3)"), "Expected function, got 1");
    assert_eq!(error_of("(\"f\" 1)"), "Expected function, got \"f\"");
}

#[test]
fn test_type_mismatch_carries_the_value() {
    assert_eq!(error_of("(+ 1 {1 2})"), "Expected number, got {1 2}");
    assert_eq!(error_of("(head 7)"), "Expected Q-Expression, got 7");
    assert_eq!(error_of("(error 7)"), "Expected string, got 7");
    assert_eq!(error_of("(def {7} 1)"), "Expected symbol, got 7");
}

#[test]
fn test_primitive_arity() {
    assert_eq!(error_of("(eval {1} {2})"), "'eval' expected 1 argument(s), got 2");
    assert_eq!(error_of("(if 1 {2})"), "'if' expected 3 argument(s), got 2");
}

#[test]
fn test_lambda_arity() {
    assert_eq!(
        error_of("((\\ {x y} {+ x y}) 1 2 3)"),
        "Expected 2 arguments, got 3"
    );
}

#[test]
fn test_empty_list_violations() {
    assert_eq!(error_of("(head {})"), "'head' expected a non-empty Q-Expression");
    assert_eq!(error_of("(tail {})"), "'tail' expected a non-empty Q-Expression");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(error_of("(/ 10 0)"), "Division by zero");
}

#[test]
fn test_malformed_variadic_formals() {
    assert_eq!(
        error_of("((\\ {& a b} {a}) 1)"),
        "Expected a single symbol following '&'"
    );
}

#[test]
fn test_binding_count_mismatch() {
    assert_eq!(error_of("(def {a b} 1)"), "Found 2 symbols but 1 values");
}

#[test]
fn test_user_error_passes_through() {
    assert_eq!(error_of("(error \"custom failure\")"), "custom failure");
}

#[test]
fn test_parse_error_messages() {
    use common::Parser;

    let message = |source: &str| Parser::parse_line(source).unwrap_err().message;
    assert_eq!(message("(+ 1"), "Expected )");
    assert_eq!(message("{1 2"), "Expected }");
    assert_eq!(message("(}"), "Expected )");
    assert_eq!(message(")"), "Unexpected )");
    assert_eq!(message("}"), "Unexpected }");
    assert_eq!(message("\"unterminated"), "Expected \"");
}
