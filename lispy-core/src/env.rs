// lispy-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.
//!
//! Environments form a chain through parent references: a lookup walks to
//! the parent on a miss, a put writes only to the receiver. Alongside the
//! value bindings each environment carries a parallel documentation map,
//! since documentation is metadata about a binding rather than about a
//! value.
//!
//! Lambdas close over a [`snapshot`](Env::snapshot) of their environment,
//! and the evaluator re-parents that snapshot to the caller's environment
//! for the duration of each call.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lispy_parser::{ClosureEnv, LispyVal, Symbol};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// # Examples
///
/// ```
/// use lispy_core::Env;
/// use lispy_parser::{LispyVal, Symbol};
///
/// let env = Env::new();
/// env.define(Symbol::new("x"), LispyVal::int(42));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), LispyVal::int(42));
///
/// // A snapshot copies the bindings but has no parent
/// let closure = env.snapshot();
/// assert_eq!(closure.lookup(&Symbol::new("x")).unwrap(), LispyVal::int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, LispyVal>,
    docs: HashMap<Symbol, Rc<str>>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                docs: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Copy this environment's own bindings and docs into a fresh
    /// environment with no parent. Values are shared, not deep-copied.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        let inner = self.inner.borrow();
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: inner.bindings.clone(),
                docs: inner.docs.clone(),
                parent: None,
            })),
        }
    }

    /// Set or clear the parent link.
    pub fn set_parent(&self, parent: Option<Env>) {
        self.inner.borrow_mut().parent = parent;
    }

    /// Walk the parent chain to the root (global) environment.
    /// Uses iterative traversal to avoid stack overflow on deep chains.
    #[must_use]
    pub fn globals(&self) -> Env {
        let mut current = self.clone();
        loop {
            let parent = current.inner.borrow().parent.clone();
            match parent {
                Some(p) => current = p,
                None => return current,
            }
        }
    }

    /// Define a binding in this environment (not parent).
    pub fn define(&self, sym: Symbol, val: LispyVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol in this environment or parent chain.
    /// Uses iterative traversal to avoid stack overflow on deep chains.
    pub fn lookup(&self, sym: &Symbol) -> Result<LispyVal> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(val) = inner.bindings.get(sym) {
                return Ok(val.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return Err(Error::UnboundSymbol(sym.clone())),
            }
        }
    }

    /// Record documentation for a binding in this environment.
    pub fn define_doc(&self, sym: Symbol, text: impl Into<Rc<str>>) {
        self.inner.borrow_mut().docs.insert(sym, text.into());
    }

    /// Look up documentation in this environment or parent chain.
    #[must_use]
    pub fn lookup_doc(&self, sym: &Symbol) -> Option<Rc<str>> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(text) = inner.docs.get(sym) {
                return Some(Rc::clone(text));
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return None,
            }
        }
    }

    /// This environment's own bindings, sorted by name.
    #[must_use]
    pub fn sorted_bindings(&self) -> Vec<(String, LispyVal)> {
        let inner = self.inner.borrow();
        let mut entries: Vec<(String, LispyVal)> = inner
            .bindings
            .iter()
            .map(|(sym, val)| (sym.name().to_string(), val.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosureEnv for Env {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn local_bindings(&self) -> Vec<(String, String)> {
        self.sorted_bindings()
            .into_iter()
            .map(|(name, val)| (name, format!("{}", val)))
            .collect()
    }
}
