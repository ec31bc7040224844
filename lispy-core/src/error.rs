// lispy-core - Error types for the Lispy evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Lispy evaluation.
//!
//! Errors are ordinary return values. The evaluator reduces S-expression
//! children left to right and propagates the first failure with `?`, which
//! is exactly the language's short-circuit rule; primitives surface errors
//! as their return value. Nothing in the interpreter panics on user input.
//!
//! # Examples
//!
//! ```
//! use lispy_core::Error;
//!
//! let err = Error::arity("head", 1, 2);
//! assert_eq!(err.to_string(), "'head' expected 1 argument(s), got 2");
//!
//! let err = Error::DivisionByZero;
//! assert_eq!(err.to_string(), "Division by zero");
//! ```

use std::fmt;

use lispy_parser::{LispyVal, Symbol};

/// Result type for Lispy evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone)]
pub enum Error {
    /// Lookup miss in the environment chain
    UnboundSymbol(Symbol),
    /// Primitive received the wrong operand count
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// Primitive received fewer operands than its minimum
    ArityAtLeast {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// Lambda application received more operands than formals
    CallArity { expected: usize, got: usize },
    /// Wrong value tag for an operation; carries the offending value's
    /// printed form
    Type {
        expected: &'static str,
        got: String,
    },
    /// `head`/`tail` on `{}`
    EmptyList { name: &'static str },
    /// `/` with a zero divisor
    DivisionByZero,
    /// Checked i64 arithmetic overflowed
    Overflow { operation: &'static str },
    /// `&` in a formals list not followed by exactly one symbol
    BadFormals,
    /// `def`/`=` symbol count does not match value count
    BindingMismatch { symbols: usize, values: usize },
    /// `load` could not read the file
    Io { path: String, message: String },
    /// Parse failure surfaced through `load`
    Parse(String),
    /// User-constructed error (the `error` primitive)
    User(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnboundSymbol(sym) => {
                write!(f, "Unbound symbol '{}'", sym)
            }
            Error::Arity {
                name,
                expected,
                got,
            } => {
                write!(f, "'{}' expected {} argument(s), got {}", name, expected, got)
            }
            Error::ArityAtLeast {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "'{}' expected at least {} argument(s), got {}",
                    name, expected, got
                )
            }
            Error::CallArity { expected, got } => {
                write!(f, "Expected {} arguments, got {}", expected, got)
            }
            Error::Type { expected, got } => {
                write!(f, "Expected {}, got {}", expected, got)
            }
            Error::EmptyList { name } => {
                write!(f, "'{}' expected a non-empty Q-Expression", name)
            }
            Error::DivisionByZero => {
                write!(f, "Division by zero")
            }
            Error::Overflow { operation } => {
                write!(f, "Integer overflow in '{}'", operation)
            }
            Error::BadFormals => {
                write!(f, "Expected a single symbol following '&'")
            }
            Error::BindingMismatch { symbols, values } => {
                write!(f, "Found {} symbols but {} values", symbols, values)
            }
            Error::Io { path, message } => {
                write!(f, "Could not load '{}': {}", path, message)
            }
            Error::Parse(msg) => {
                write!(f, "{}", msg)
            }
            Error::User(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an exact-arity error.
    pub fn arity(name: &'static str, expected: usize, got: usize) -> Self {
        Error::Arity {
            name,
            expected,
            got,
        }
    }

    /// Create a minimum-arity error.
    pub fn arity_at_least(name: &'static str, expected: usize, got: usize) -> Self {
        Error::ArityAtLeast {
            name,
            expected,
            got,
        }
    }

    /// Create a type error carrying the offending value's printed form.
    pub fn type_mismatch(expected: &'static str, got: &LispyVal) -> Self {
        Error::Type {
            expected,
            got: format!("{}", got),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    pub fn io(path: impl Into<String>, error: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

impl From<lispy_parser::ParseError> for Error {
    fn from(e: lispy_parser::ParseError) -> Self {
        Error::Parse(e.to_string())
    }
}
