// lispy-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and utilities for Lispy integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate code in a fresh environment with builtins
//! - [`eval_str_with_env`] - Evaluate code in an existing environment
//! - [`eval_str_with_stdlib`] - Evaluate code with the standard library
//! - [`eval_seq`] - Evaluate expressions in order, returning the last
//! - [`new_env`] - Create a new environment with builtins registered
//! - [`new_env_with_stdlib`] - Create a new environment with the standard library
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err!`] - Assert that code produces an error with a message

// Re-export common types for convenience
pub use lispy_core::{init_stdlib, register_builtins, Env};
#[allow(unused_imports)]
pub use lispy_parser::{LispyVal, Parser, Symbol};

/// Evaluate a Lispy expression string in a fresh environment.
///
/// The environment is pre-populated with built-in primitives but not the
/// standard library (use [`eval_str_with_stdlib`] for that).
pub fn eval_str(s: &str) -> Result<LispyVal, String> {
    let env = new_env();
    eval_str_with_env(s, &env)
}

/// Evaluate a Lispy expression string in the given environment.
///
/// The input is parsed in line mode, like a REPL entry.
pub fn eval_str_with_env(s: &str, env: &Env) -> Result<LispyVal, String> {
    let expr = Parser::parse_line(s).map_err(|e| e.to_string())?;
    lispy_core::eval(&expr, env).map_err(|e| e.to_string())
}

/// Evaluate a Lispy expression string with the standard library loaded.
#[allow(dead_code)]
pub fn eval_str_with_stdlib(s: &str) -> Result<LispyVal, String> {
    let env = new_env_with_stdlib();
    eval_str_with_env(s, &env)
}

/// Evaluate expressions in order against one environment, returning the
/// last result. Useful for tests that define bindings before the final
/// expression.
#[allow(dead_code)]
pub fn eval_seq(strs: &[&str], env: &Env) -> Result<LispyVal, String> {
    let mut result = LispyVal::empty_sexpr();
    for s in strs {
        result = eval_str_with_env(s, env)?;
    }
    Ok(result)
}

/// Create a new environment with builtins registered.
#[must_use]
pub fn new_env() -> Env {
    let env = Env::new();
    register_builtins(&env);
    env
}

/// Create a new environment with the standard library loaded.
///
/// # Panics
///
/// Panics if the standard library fails to load (should never happen).
#[must_use]
#[allow(dead_code)]
pub fn new_env_with_stdlib() -> Env {
    let env = new_env();
    init_stdlib(&env).expect("Failed to load standard library");
    env
}

/// Assert that evaluating `input` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", LispyVal::int(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error containing `message`.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(head {})", "non-empty");
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr, $message:expr) => {
        let result = $crate::common::eval_str($input);
        match result {
            Ok(val) => panic!("Expected error for '{}' but got {}", $input, val),
            Err(e) => assert!(
                e.contains($message),
                "Error for '{}' was '{}', expected it to contain '{}'",
                $input,
                e,
                $message
            ),
        }
    };
}
