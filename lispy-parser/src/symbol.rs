// lispy-parser - Symbol type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are the identifiers of Lispy programs.
//!
//! # Interning
//!
//! Symbols are interned using a global string interner, meaning that two
//! symbols with the same name share the same underlying storage. This
//! provides several benefits:
//!
//! - **O(1) equality**: Comparing symbols is a pointer comparison, not string comparison
//! - **O(1) hashing**: Hash is computed from the pointer address
//! - **Memory efficiency**: Identical symbols share storage
//!
//! Interned symbols are never deallocated; memory usage grows monotonically
//! with the number of unique symbols. Lispy programs use a bounded symbol
//! vocabulary, so the overhead is modest.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// An interned identifier.
#[derive(Clone)]
pub struct Symbol {
    inner: Arc<str>,
}

/// Global symbol interner
static SYMBOL_INTERNER: OnceLock<Mutex<HashMap<String, Arc<str>>>> = OnceLock::new();

fn get_interner() -> &'static Mutex<HashMap<String, Arc<str>>> {
    SYMBOL_INTERNER.get_or_init(|| Mutex::new(HashMap::new()))
}

impl Symbol {
    /// Create a new symbol, reusing storage if the name was seen before.
    pub fn new(name: &str) -> Self {
        let mut interner = get_interner()
            .lock()
            .expect("Symbol interner mutex poisoned: another thread panicked while holding the lock");
        let inner = if let Some(existing) = interner.get(name) {
            Arc::clone(existing)
        } else {
            let interned: Arc<str> = Arc::from(name);
            interner.insert(name.to_string(), Arc::clone(&interned));
            interned
        };
        Symbol { inner }
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner
    }

    /// Whether this symbol is the `&` variadic marker.
    #[must_use]
    pub fn is_variadic_marker(&self) -> bool {
        &*self.inner == "&"
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        // Due to interning, pointer comparison is sufficient
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.as_ref().cmp(other.inner.as_ref())
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Use pointer hash for interned symbols
        Arc::as_ptr(&self.inner).hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
