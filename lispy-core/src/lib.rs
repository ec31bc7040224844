// lispy-core - Runtime and evaluator for the Lispy programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lispy-core
//!
//! Runtime and evaluator for the Lispy programming language.
//! Provides a tree-walking interpreter for `LispyVal` expressions.
//!
//! # Quick Start
//!
//! ```
//! use lispy_core::{Env, eval, register_builtins, init_stdlib};
//! use lispy_parser::Parser;
//!
//! // Set up the environment with builtins and standard library
//! let env = Env::new();
//! register_builtins(&env);
//! init_stdlib(&env).unwrap();
//!
//! // Parse and evaluate an expression
//! let expr = Parser::parse_line("(+ 1 2 3)").unwrap();
//! let result = eval(&expr, &env).unwrap();
//!
//! assert_eq!(result.to_string(), "6");
//! ```
//!
//! # Core Components
//!
//! - [`Env`] - Lexical environment for variable bindings and documentation
//! - [`eval`] - Evaluate a `LispyVal` expression
//! - [`register_builtins`] - Register the primitive operations
//! - [`init_stdlib`] - Evaluate the embedded standard library
//! - [`load_file`] - Evaluate a source file form by form

use std::fs;

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;

pub use builtins::register_builtins;
pub use env::Env;
pub use error::{Error, Result};
pub use eval::{apply, eval, make_builtin, BuiltinImpl};

// Re-export parser types for convenience
pub use lispy_parser::{LispyVal, Parser, Symbol};

/// Embedded standard library source.
const STDLIB: &str = include_str!("../../stdlib.lispy");

/// Initialise the standard library by evaluating the embedded copy of
/// `stdlib.lispy`. Call this after [`register_builtins`].
///
/// This is a convenience for embedders and tests that want the library
/// without touching the filesystem. The `lispy` binary does not call it:
/// at startup it loads `stdlib.lispy` from the working directory via
/// [`load_file`] only when that file is present, so a directory without
/// one exposes the raw primitives alone.
///
/// # Examples
///
/// ```
/// use lispy_core::{Env, eval, register_builtins, init_stdlib};
/// use lispy_parser::Parser;
///
/// let env = Env::new();
/// register_builtins(&env);
/// init_stdlib(&env).unwrap();
///
/// // Standard library functions are now available
/// let expr = Parser::parse_line("(len {1 2 3})").unwrap();
/// assert_eq!(eval(&expr, &env).unwrap().to_string(), "3");
/// ```
pub fn init_stdlib(env: &Env) -> Result<()> {
    let mut parser = lispy_parser::Parser::new(STDLIB)?;
    while let Some(form) = parser.next_form()? {
        eval::eval(&form, env)?;
    }
    Ok(())
}

/// Read a source file and evaluate its forms in order against `env`.
///
/// The file's contents are consumed fully before evaluation begins. Parse
/// and evaluation errors are reported to standard output per form and do
/// not abort the load; only an unreadable file is an error.
pub fn load_file(env: &Env, path: &str) -> Result<()> {
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    run_forms(env, &source);
    Ok(())
}

fn run_forms(env: &Env, source: &str) {
    let mut parser = match lispy_parser::Parser::new(source) {
        Ok(parser) => parser,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    loop {
        match parser.next_form() {
            Ok(Some(form)) => {
                if let Err(e) = eval::eval(&form, env) {
                    println!("Error: {}", e);
                }
            }
            Ok(None) => break,
            Err(e) => println!("Error: {}", e),
        }
    }
}
