// lispy-core - Comparison built-in primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Ordering on integers (<, <=, >, >=) and structural equality on any
//! values (==, !=). All return `1` or `0`.

use lispy_parser::LispyVal;

use crate::env::Env;
use crate::error::Result;

use super::{as_int, expect_arity};

fn bool_val(b: bool) -> LispyVal {
    LispyVal::int(i64::from(b))
}

fn ordering(
    name: &'static str,
    args: &[LispyVal],
    op: impl Fn(i64, i64) -> bool,
) -> Result<LispyVal> {
    expect_arity(name, 2, args)?;
    let a = as_int(&args[0])?;
    let b = as_int(&args[1])?;
    Ok(bool_val(op(a, b)))
}

pub(crate) fn builtin_lt(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    ordering("<", args, |a, b| a < b)
}

pub(crate) fn builtin_le(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    ordering("<=", args, |a, b| a <= b)
}

pub(crate) fn builtin_gt(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    ordering(">", args, |a, b| a > b)
}

pub(crate) fn builtin_ge(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    ordering(">=", args, |a, b| a >= b)
}

/// `(== a b)` - structural, tag-sensitive equality.
pub(crate) fn builtin_eq(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("==", 2, args)?;
    Ok(bool_val(args[0] == args[1]))
}

/// `(!= a b)`
pub(crate) fn builtin_ne(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("!=", 2, args)?;
    Ok(bool_val(args[0] != args[1]))
}
