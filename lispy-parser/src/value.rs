// lispy-parser - Value types for Lispy
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Lispy.
//!
//! `LispyVal` is the central enum representing all Lispy values: every datum
//! the parser produces and the evaluator consumes is one of its variants.
//! Values are immutable and use reference counting for efficient sharing;
//! S- and Q-expression children live in `im::Vector`, so cloning a list is
//! O(1) and `head`/`tail`/`join` share structure with their inputs.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::symbol::Symbol;

// ============================================================================
// ClosureEnv - Type-Erased Captured Environment
// ============================================================================

/// The environment a lambda closes over.
///
/// The concrete environment type is defined in the evaluator crate; lambdas
/// store it type-erased so that the value model does not depend on the
/// evaluator. The evaluator downcasts through [`ClosureEnv::as_any`].
pub trait ClosureEnv {
    /// Returns a reference to the underlying environment as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Local bindings as `(name, printed value)` pairs, sorted by name.
    ///
    /// Used when displaying a partially applied lambda.
    fn local_bindings(&self) -> Vec<(String, String)>;
}

// ============================================================================
// Function Types
// ============================================================================

/// A host-implemented primitive operation.
///
/// The name identifies the primitive for display and for structural
/// comparison; the callable itself is type-erased (its signature names the
/// evaluator's environment type, which this crate cannot see).
#[derive(Clone)]
pub struct LispyBuiltin {
    name: Rc<str>,
    func: Rc<dyn Any>,
}

impl LispyBuiltin {
    /// Create a new builtin with a type-erased callable.
    pub fn new(name: impl Into<Rc<str>>, func: Rc<dyn Any>) -> Self {
        LispyBuiltin {
            name: name.into(),
            func,
        }
    }

    /// Get the primitive's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the inner callable reference.
    #[must_use]
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for LispyBuiltin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LispyBuiltin({})", self.name)
    }
}

impl PartialEq for LispyBuiltin {
    fn eq(&self, other: &Self) -> bool {
        // Builtins compare by name; the callable is not structural
        self.name == other.name
    }
}

/// A user-defined function.
///
/// Combines a captured environment (possibly holding partially applied
/// arguments), the formal parameter names, and a body evaluated as an
/// S-expression on application. The `&` marker in the formals denotes that
/// the following symbol binds a Q-expression of any remaining operands.
#[derive(Clone)]
pub struct LispyLambda {
    /// Captured environment (type-erased to avoid a circular dependency)
    pub env: Rc<dyn ClosureEnv>,
    /// Formal parameter names; may contain the `&` variadic marker
    pub formals: Vec<Symbol>,
    /// Body forms
    pub body: Vector<LispyVal>,
}

impl LispyLambda {
    /// Create a new lambda.
    pub fn new(env: Rc<dyn ClosureEnv>, formals: Vec<Symbol>, body: Vector<LispyVal>) -> Self {
        LispyLambda { env, formals, body }
    }
}

impl fmt::Debug for LispyLambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LispyLambda({})", self)
    }
}

impl PartialEq for LispyLambda {
    fn eq(&self, other: &Self) -> bool {
        // The captured environment is not structural
        self.formals == other.formals && self.body == other.body
    }
}

impl fmt::Display for LispyLambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\\ {{")?;
        for (i, formal) in self.formals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", formal)?;
        }
        write!(f, "}} {{")?;
        for (i, form) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", form)?;
        }
        write!(f, "}})")?;
        // Partially applied arguments, if any
        for (name, value) in self.env.local_bindings() {
            write!(f, " {}={}", name, value)?;
        }
        Ok(())
    }
}

// ============================================================================
// LispyVal
// ============================================================================

/// The core value type for Lispy.
///
/// All values are represented by this enum. A value is immutable once
/// constructed; evaluation produces new values. S- and Q-expressions are
/// distinguished by tag only and hold their children in the same persistent
/// sequence type.
#[derive(Clone, PartialEq)]
pub enum LispyVal {
    /// 64-bit signed integer; doubles as boolean (0 false, non-zero true)
    Int(i64),
    /// Immutable UTF-8 string
    Str(Rc<str>),
    /// Identifier, an unevaluated name
    Sym(Symbol),
    /// Code: evaluation applies the first child to the rest
    SExpr(Vector<LispyVal>),
    /// Literal data list; evaluates to itself
    QExpr(Vector<LispyVal>),
    /// Host-implemented primitive
    Builtin(LispyBuiltin),
    /// User-defined function
    Lambda(LispyLambda),
}

impl LispyVal {
    /// Create an integer value.
    #[must_use]
    pub fn int(n: i64) -> Self {
        LispyVal::Int(n)
    }

    /// Create a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        LispyVal::Str(s.into())
    }

    /// Create a symbol value.
    #[must_use]
    pub fn symbol(sym: Symbol) -> Self {
        LispyVal::Sym(sym)
    }

    /// Create an S-expression from a sequence of children.
    pub fn sexpr(items: impl IntoIterator<Item = LispyVal>) -> Self {
        LispyVal::SExpr(items.into_iter().collect())
    }

    /// Create a Q-expression from a sequence of children.
    pub fn qexpr(items: impl IntoIterator<Item = LispyVal>) -> Self {
        LispyVal::QExpr(items.into_iter().collect())
    }

    /// The empty S-expression `()`.
    #[must_use]
    pub fn empty_sexpr() -> Self {
        LispyVal::SExpr(Vector::new())
    }

    /// The empty Q-expression `{}`.
    #[must_use]
    pub fn empty_qexpr() -> Self {
        LispyVal::QExpr(Vector::new())
    }

    /// Get the integer payload, if this is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            LispyVal::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LispyVal::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the symbol, if this is a symbol.
    #[must_use]
    pub fn as_sym(&self) -> Option<&Symbol> {
        match self {
            LispyVal::Sym(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get the children, if this is a Q-expression.
    #[must_use]
    pub fn as_qexpr(&self) -> Option<&Vector<LispyVal>> {
        match self {
            LispyVal::QExpr(items) => Some(items),
            _ => None,
        }
    }

    /// The user-facing display form: strings print raw, everything else
    /// uses the debug form.
    #[must_use]
    pub fn display_string(&self) -> String {
        match self {
            LispyVal::Str(s) => s.to_string(),
            other => format!("{}", other),
        }
    }
}

impl fmt::Display for LispyVal {
    /// The debug form: re-readable for atoms, `Error:`-free, strings quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LispyVal::Int(n) => write!(f, "{}", n),
            LispyVal::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            LispyVal::Sym(sym) => write!(f, "{}", sym),
            LispyVal::SExpr(items) => write_seq(f, items, '(', ')'),
            LispyVal::QExpr(items) => write_seq(f, items, '{', '}'),
            LispyVal::Builtin(b) => write!(f, "<{}>", b.name()),
            LispyVal::Lambda(l) => write!(f, "{}", l),
        }
    }
}

impl fmt::Debug for LispyVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn write_seq(
    f: &mut fmt::Formatter<'_>,
    items: &Vector<LispyVal>,
    open: char,
    close: char,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct TestScope(Vec<(String, String)>);

    impl ClosureEnv for TestScope {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn local_bindings(&self) -> Vec<(String, String)> {
            self.0.clone()
        }
    }

    fn lambda(bindings: Vec<(String, String)>, formals: &[&str]) -> LispyVal {
        LispyVal::Lambda(LispyLambda::new(
            Rc::new(TestScope(bindings)),
            formals.iter().map(|name| Symbol::new(name)).collect(),
            Vector::from(vec![
                LispyVal::symbol(Symbol::new("+")),
                LispyVal::symbol(Symbol::new("x")),
                LispyVal::symbol(Symbol::new("y")),
            ]),
        ))
    }

    #[test]
    fn test_empty_sexpr_and_qexpr_are_not_equal() {
        assert_ne!(LispyVal::empty_sexpr(), LispyVal::empty_qexpr());
    }

    #[test]
    fn test_sexpr_qexpr_same_children_differ_by_tag() {
        let children = vec![LispyVal::int(1), LispyVal::int(2)];
        assert_ne!(
            LispyVal::sexpr(children.clone()),
            LispyVal::qexpr(children)
        );
    }

    #[test]
    fn test_int_equality() {
        assert_eq!(LispyVal::int(42), LispyVal::int(42));
        assert_ne!(LispyVal::int(42), LispyVal::int(43));
    }

    #[test]
    fn test_builtin_equality_is_by_name() {
        let a = LispyBuiltin::new("head", Rc::new(1u8));
        let b = LispyBuiltin::new("head", Rc::new(2u8));
        let c = LispyBuiltin::new("tail", Rc::new(1u8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_lambda_equality_ignores_environment() {
        let a = lambda(vec![("x".to_string(), "10".to_string())], &["x", "y"]);
        let b = lambda(vec![], &["x", "y"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lambda_equality_respects_formals() {
        let a = lambda(vec![], &["x", "y"]);
        let b = lambda(vec![], &["x"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_atoms() {
        assert_eq!(format!("{}", LispyVal::int(-7)), "-7");
        assert_eq!(format!("{}", LispyVal::symbol(Symbol::new("foo"))), "foo");
        assert_eq!(format!("{}", LispyVal::string("hi")), "\"hi\"");
    }

    #[test]
    fn test_display_escapes_string() {
        let val = LispyVal::string("a\nb\t\\\"");
        assert_eq!(format!("{}", val), "\"a\\nb\\t\\\\\\\"\"");
    }

    #[test]
    fn test_display_string_raw() {
        assert_eq!(LispyVal::string("a\nb").display_string(), "a\nb");
        assert_eq!(LispyVal::int(5).display_string(), "5");
    }

    #[test]
    fn test_display_sequences() {
        let sexpr = LispyVal::sexpr(vec![
            LispyVal::symbol(Symbol::new("+")),
            LispyVal::int(1),
            LispyVal::int(2),
        ]);
        assert_eq!(format!("{}", sexpr), "(+ 1 2)");

        let qexpr = LispyVal::qexpr(vec![LispyVal::int(1), LispyVal::qexpr(vec![])]);
        assert_eq!(format!("{}", qexpr), "{1 {}}");
    }

    #[test]
    fn test_display_builtin() {
        let builtin = LispyVal::Builtin(LispyBuiltin::new("join", Rc::new(0u8)));
        assert_eq!(format!("{}", builtin), "<join>");
    }

    #[test]
    fn test_display_lambda_with_bindings() {
        let val = lambda(vec![("x".to_string(), "10".to_string())], &["y"]);
        assert_eq!(format!("{}", val), "(\\ {y} {+ x y}) x=10");
    }
}
