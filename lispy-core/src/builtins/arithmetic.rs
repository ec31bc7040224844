// lispy-core - Arithmetic built-in primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integer arithmetic: +, -, *, /
//!
//! All four fold left over one or more integer operands; `-` with a single
//! operand negates. Operations are checked: overflow and division by zero
//! are errors, never panics or wrapping.

use lispy_parser::LispyVal;

use crate::env::Env;
use crate::error::{Error, Result};

use super::{as_int, expect_at_least};

fn fold(
    name: &'static str,
    args: &[LispyVal],
    op: impl Fn(i64, i64) -> Result<i64>,
) -> Result<LispyVal> {
    expect_at_least(name, 1, args)?;
    let mut acc = as_int(&args[0])?;
    for arg in &args[1..] {
        acc = op(acc, as_int(arg)?)?;
    }
    Ok(LispyVal::int(acc))
}

/// `(+ n1 n2 ...)`
pub(crate) fn builtin_add(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    fold("+", args, |a, b| {
        a.checked_add(b).ok_or(Error::Overflow { operation: "+" })
    })
}

/// `(- n)` negates; `(- n1 n2 ...)` folds left.
pub(crate) fn builtin_sub(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_at_least("-", 1, args)?;
    if args.len() == 1 {
        let n = as_int(&args[0])?;
        return n
            .checked_neg()
            .map(LispyVal::int)
            .ok_or(Error::Overflow { operation: "-" });
    }
    fold("-", args, |a, b| {
        a.checked_sub(b).ok_or(Error::Overflow { operation: "-" })
    })
}

/// `(* n1 n2 ...)`
pub(crate) fn builtin_mul(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    fold("*", args, |a, b| {
        a.checked_mul(b).ok_or(Error::Overflow { operation: "*" })
    })
}

/// `(/ n1 n2 ...)` - truncating division.
pub(crate) fn builtin_div(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    fold("/", args, |a, b| {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }
        a.checked_div(b).ok_or(Error::Overflow { operation: "/" })
    })
}
