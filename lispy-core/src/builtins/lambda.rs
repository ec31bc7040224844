// lispy-core - Lambda construction primitive
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `\` primitive.

use lispy_parser::{LispyVal, Symbol};

use crate::env::Env;
use crate::error::Result;
use crate::eval::make_lambda;

use super::{as_qexpr, as_sym, expect_arity};

/// `(\ formals_q body_q)` - construct a lambda over a fresh, empty closure
/// environment. The formals must all be symbols; `&` is the variadic
/// marker.
pub(crate) fn builtin_lambda(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("\\", 2, args)?;
    let formals: Vec<Symbol> = as_qexpr(&args[0])?
        .iter()
        .map(|item| as_sym(item).map(Symbol::clone))
        .collect::<Result<_>>()?;
    let body = as_qexpr(&args[1])?.clone();
    Ok(make_lambda(formals, body))
}
