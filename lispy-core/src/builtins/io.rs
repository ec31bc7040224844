// lispy-core - I/O and diagnostic primitives
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! print, error, load, doc, help.
//!
//! `print` uses the display form (strings raw); everything the REPL echoes
//! uses the debug form. `load` evaluates a file's forms in the global
//! environment, reporting per-form failures without aborting the load.

use lispy_parser::LispyVal;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::load_file;

use super::{as_quoted_sym, as_str, expect_arity};

/// `(print v ...)` - display forms separated by spaces, then a newline.
pub(crate) fn builtin_print(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    let parts: Vec<String> = args.iter().map(LispyVal::display_string).collect();
    println!("{}", parts.join(" "));
    Ok(LispyVal::empty_sexpr())
}

/// `(error "msg")` - construct an error value.
pub(crate) fn builtin_error(_env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("error", 1, args)?;
    let message = as_str(&args[0])?;
    Err(Error::User(message.to_string()))
}

/// `(load "path")` - read and evaluate a source file in the global
/// environment. Per-form errors are reported but do not abort the load;
/// only an unreadable file is an error.
pub(crate) fn builtin_load(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("load", 1, args)?;
    let path = as_str(&args[0])?;
    load_file(&env.globals(), path)?;
    Ok(LispyVal::empty_sexpr())
}

/// `(doc {sym} "text")` - record documentation on the current environment.
pub(crate) fn builtin_doc(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("doc", 2, args)?;
    let sym = as_quoted_sym(&args[0])?;
    let text = as_str(&args[1])?;
    env.define_doc(sym, text);
    Ok(LispyVal::empty_sexpr())
}

/// `(help {sym})` - print documentation for a symbol. The distinguished
/// name `env` prints the current environment snapshot instead.
pub(crate) fn builtin_help(env: &Env, args: &[LispyVal]) -> Result<LispyVal> {
    expect_arity("help", 1, args)?;
    let sym = as_quoted_sym(&args[0])?;

    if sym.name() == "env" {
        for (name, val) in env.sorted_bindings() {
            println!("{} = {}", name, val);
        }
        return Ok(LispyVal::empty_sexpr());
    }

    match env.lookup_doc(&sym) {
        Some(text) => println!("{}: {}", sym, text),
        None => println!("No documentation for '{}'", sym),
    }
    Ok(LispyVal::empty_sexpr())
}
