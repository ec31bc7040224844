// lispy-core - Control built-in primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conditional evaluation.

use lispy_parser::LispyVal;

use crate::env::Env;
use crate::error::Result;
use crate::eval;

use super::{as_int, as_qexpr, expect_arity};

/// `(if cond then_q else_q)` - evaluate one branch's contents as an
/// S-Expression in the caller's environment. A condition of `0` is false;
/// anything else is true.
pub(crate) fn builtin_if(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("if", 3, args)?;
    let cond = as_int(&args[0])?;
    let then_branch = as_qexpr(&args[1])?;
    let else_branch = as_qexpr(&args[2])?;

    let chosen = if cond != 0 { then_branch } else { else_branch };
    eval::eval(&LispyVal::SExpr(chosen.clone()), env)
}
