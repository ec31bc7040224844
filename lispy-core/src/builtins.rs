// lispy-core - Built-in primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The primitive operations of Lispy.
//!
//! Every primitive receives the calling environment and the already
//! evaluated operand sequence. Registration installs each primitive in the
//! global environment together with a one-line documentation string for
//! `help`.

mod arithmetic;
mod binding;
mod comparison;
mod control;
mod io;
mod lambda;
mod lists;

use im::Vector;
use lispy_parser::{LispyVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::{make_builtin, BuiltinImpl};

use arithmetic::{builtin_add, builtin_div, builtin_mul, builtin_sub};
use binding::{builtin_assign, builtin_def};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt, builtin_ne};
use control::builtin_if;
use io::{builtin_doc, builtin_error, builtin_help, builtin_load, builtin_print};
use lambda::builtin_lambda;
use lists::{builtin_eval, builtin_head, builtin_join, builtin_list, builtin_tail};

/// Register every primitive into the environment.
pub fn register_builtins(env: &Env) {
    // Lists
    env.define_builtin("list", builtin_list, "Collect any number of values into a Q-Expression.");
    env.define_builtin("head", builtin_head, "Q-Expression of the first element of a non-empty Q-Expression.");
    env.define_builtin("tail", builtin_tail, "A non-empty Q-Expression without its first element.");
    env.define_builtin("join", builtin_join, "Concatenate Q-Expressions in order.");
    env.define_builtin("eval", builtin_eval, "Evaluate a Q-Expression as an S-Expression.");

    // Arithmetic
    env.define_builtin("+", builtin_add, "Sum one or more numbers.");
    env.define_builtin("-", builtin_sub, "Negate one number, or subtract the rest from the first.");
    env.define_builtin("*", builtin_mul, "Multiply one or more numbers.");
    env.define_builtin("/", builtin_div, "Divide the first number by the rest, truncating toward zero.");

    // Comparison and equality
    env.define_builtin("<", builtin_lt, "1 if the first number is less than the second, else 0.");
    env.define_builtin("<=", builtin_le, "1 if the first number is at most the second, else 0.");
    env.define_builtin(">", builtin_gt, "1 if the first number is greater than the second, else 0.");
    env.define_builtin(">=", builtin_ge, "1 if the first number is at least the second, else 0.");
    env.define_builtin("==", builtin_eq, "1 if the two values are structurally equal, else 0.");
    env.define_builtin("!=", builtin_ne, "1 if the two values differ structurally, else 0.");

    // Control
    env.define_builtin("if", builtin_if, "Evaluate the first Q-Expression if the condition is non-zero, else the second.");

    // Binding
    env.define_builtin("def", builtin_def, "Bind symbols to values in the global environment.");
    env.define_builtin("=", builtin_assign, "Bind symbols to values in the current environment.");

    // Lambda construction
    env.define_builtin("\\", builtin_lambda, "Construct a lambda from a formals Q-Expression and a body Q-Expression.");

    // I/O and diagnostics
    env.define_builtin("print", builtin_print, "Print values separated by spaces, followed by a newline.");
    env.define_builtin("error", builtin_error, "Construct an error from a message string.");
    env.define_builtin("load", builtin_load, "Load and evaluate a source file in the global environment.");
    env.define_builtin("doc", builtin_doc, "Record documentation for a symbol.");
    env.define_builtin("help", builtin_help, "Print documentation for a symbol; {env} prints the environment.");
}

/// Helper trait to define primitives with their documentation.
pub trait EnvExt {
    fn define_builtin(&self, name: &'static str, func: BuiltinImpl, doc: &'static str);
}

impl EnvExt for Env {
    fn define_builtin(&self, name: &'static str, func: BuiltinImpl, doc: &'static str) {
        self.define(Symbol::new(name), LispyVal::Builtin(make_builtin(name, func)));
        self.define_doc(Symbol::new(name), doc);
    }
}

// ============================================================================
// Shared operand checks
// ============================================================================

/// Require an exact operand count.
fn expect_arity(name: &'static str, expected: usize, args: &[LispyVal]) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::arity(name, expected, args.len()))
    }
}

/// Require a minimum operand count.
fn expect_at_least(name: &'static str, expected: usize, args: &[LispyVal]) -> Result<()> {
    if args.len() >= expected {
        Ok(())
    } else {
        Err(Error::arity_at_least(name, expected, args.len()))
    }
}

/// Require a Q-Expression operand.
fn as_qexpr(val: &LispyVal) -> Result<&Vector<LispyVal>> {
    val.as_qexpr()
        .ok_or_else(|| Error::type_mismatch("Q-Expression", val))
}

/// Require an integer operand.
fn as_int(val: &LispyVal) -> Result<i64> {
    val.as_int()
        .ok_or_else(|| Error::type_mismatch("number", val))
}

/// Require a string operand.
fn as_str(val: &LispyVal) -> Result<&str> {
    val.as_str()
        .ok_or_else(|| Error::type_mismatch("string", val))
}

/// Require a symbol operand.
fn as_sym(val: &LispyVal) -> Result<&Symbol> {
    val.as_sym()
        .ok_or_else(|| Error::type_mismatch("symbol", val))
}

/// Require a Q-Expression holding exactly one symbol, as taken by `doc`
/// and `help`.
fn as_quoted_sym(val: &LispyVal) -> Result<Symbol> {
    let items = as_qexpr(val)?;
    if items.len() != 1 {
        return Err(Error::type_mismatch("symbol", val));
    }
    Ok(as_sym(items.front().expect("length checked above"))?.clone())
}
