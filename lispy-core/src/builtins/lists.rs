// lispy-core - List built-in primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! List operations: list, head, tail, join, eval

use im::Vector;
use lispy_parser::LispyVal;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval;

use super::{as_qexpr, expect_arity, expect_at_least};

/// `(list v1 v2 ...)` - collect values into a Q-Expression.
pub(crate) fn builtin_list(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    Ok(LispyVal::qexpr(args.iter().cloned()))
}

/// `(head q)` - Q-Expression of the first element of a non-empty
/// Q-Expression.
pub(crate) fn builtin_head(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("head", 1, args)?;
    let items = as_qexpr(&args[0])?;
    match items.front() {
        Some(first) => Ok(LispyVal::qexpr([first.clone()])),
        None => Err(Error::EmptyList { name: "head" }),
    }
}

/// `(tail q)` - a non-empty Q-Expression without its first element.
pub(crate) fn builtin_tail(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("tail", 1, args)?;
    let items = as_qexpr(&args[0])?;
    if items.is_empty() {
        return Err(Error::EmptyList { name: "tail" });
    }
    let mut rest = items.clone();
    rest.pop_front();
    Ok(LispyVal::QExpr(rest))
}

/// `(join q1 q2 ...)` - concatenate Q-Expressions in order.
pub(crate) fn builtin_join(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_at_least("join", 1, args)?;
    let mut joined: Vector<LispyVal> = Vector::new();
    for arg in args {
        joined.append(as_qexpr(arg)?.clone());
    }
    Ok(LispyVal::QExpr(joined))
}

/// `(eval q)` - evaluate a Q-Expression's contents as an S-Expression in
/// the caller's environment.
pub(crate) fn builtin_eval(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("eval", 1, args)?;
    let items = as_qexpr(&args[0])?;
    eval::eval(&LispyVal::SExpr(items.clone()), env)
}
