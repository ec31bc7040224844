// lispy-core - Binding built-in primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `def` and `=`: bind symbols to values.
//!
//! Both take a Q-Expression of symbols followed by exactly as many values.
//! `def` writes into the global environment at the top of the parent chain;
//! `=` writes into the caller's environment.

use lispy_parser::{LispyVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};

use super::{as_qexpr, as_sym, expect_at_least};

fn bind_into(name: &'static str, target: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_at_least(name, 1, args)?;
    let symbols: Vec<Symbol> = as_qexpr(&args[0])?
        .iter()
        .map(|item| as_sym(item).map(Symbol::clone))
        .collect::<Result<_>>()?;

    let values = &args[1..];
    if symbols.len() != values.len() {
        return Err(Error::BindingMismatch {
            symbols: symbols.len(),
            values: values.len(),
        });
    }

    for (sym, val) in symbols.into_iter().zip(values.iter()) {
        target.define(sym, val.clone());
    }
    Ok(LispyVal::empty_sexpr())
}

/// `(def {s1 s2 ...} v1 v2 ...)` - bind in the global environment.
pub(crate) fn builtin_def(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    bind_into("def", &env.globals(), args)
}

/// `(= {s1 s2 ...} v1 v2 ...)` - bind in the current environment.
pub(crate) fn builtin_assign(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    bind_into("=", env, args)
}
