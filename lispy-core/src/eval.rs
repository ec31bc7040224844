// lispy-core - Evaluator for Lispy
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The tree-walking evaluator.
//!
//! Reduction is by tag: symbols resolve through the environment chain,
//! S-expressions reduce their children left to right and apply the first
//! to the rest, and every other value is self-evaluating. The evaluator is
//! re-entrant; primitives such as `eval`, `if` and lambda application call
//! back into [`eval`].
//!
//! Stack usage is proportional to expression nesting; deep recursion in
//! user programs can exhaust the native stack.

use std::rc::Rc;

use im::Vector;
use lispy_parser::{LispyBuiltin, LispyLambda, LispyVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};

/// Signature of a host-implemented primitive: the calling environment and
/// the already-evaluated operand sequence.
pub type BuiltinImpl = fn(&Env, &[LispyVal]) -> Result<LispyVal>;

/// Create a builtin value from a primitive function.
pub fn make_builtin(name: &'static str, func: BuiltinImpl) -> LispyBuiltin {
    LispyBuiltin::new(name, Rc::new(func))
}

/// Evaluate a value against an environment.
pub fn eval(expr: &LispyVal, env: &Env) -> Result<LispyVal> {
    match expr {
        LispyVal::Sym(sym) => env.lookup(sym),
        LispyVal::SExpr(items) => eval_sexpr(items, env),
        // Everything else is self-evaluating
        _ => Ok(expr.clone()),
    }
}

/// Reduce an S-expression: children left to right against the same
/// environment (the first error wins), then empty/single collapse, then
/// operator dispatch.
fn eval_sexpr(items: &Vector<LispyVal>, env: &Env) -> Result<LispyVal> {
    let mut reduced: Vec<LispyVal> = Vec::with_capacity(items.len());
    for item in items {
        reduced.push(eval(item, env)?);
    }

    if reduced.is_empty() {
        return Ok(LispyVal::empty_sexpr());
    }
    if reduced.len() == 1 {
        return Ok(reduced.remove(0));
    }

    let operands = reduced.split_off(1);
    let operator = reduced.remove(0);
    apply(&operator, &operands, env)
}

/// Apply an operator to already-evaluated operands.
pub fn apply(operator: &LispyVal, operands: &[LispyVal], env: &Env) -> Result<LispyVal> {
    match operator {
        LispyVal::Builtin(builtin) => {
            let func = builtin
                .func()
                .downcast_ref::<BuiltinImpl>()
                .expect("builtin registered with a foreign callable type");
            func(env, operands)
        }
        LispyVal::Lambda(lambda) => apply_lambda(lambda, operands, env),
        other => Err(Error::type_mismatch("function", other)),
    }
}

/// Apply a lambda: bind operands over a snapshot of the captured
/// environment, absorbing a `&` variadic remainder if present. Exhausted
/// formals evaluate the body with the snapshot re-parented to the caller;
/// leftover formals produce a partial application carrying the populated
/// snapshot.
fn apply_lambda(lambda: &LispyLambda, operands: &[LispyVal], caller: &Env) -> Result<LispyVal> {
    let captured = lambda
        .env
        .as_any()
        .downcast_ref::<Env>()
        .expect("lambda environment must be the evaluator's Env");
    let local = captured.snapshot();

    let formals = &lambda.formals;
    let mut next_formal = 0;
    let mut next_operand = 0;

    while next_operand < operands.len() {
        if next_formal == formals.len() {
            return Err(Error::CallArity {
                expected: formals.len(),
                got: operands.len(),
            });
        }
        let sym = &formals[next_formal];
        next_formal += 1;

        if sym.is_variadic_marker() {
            if formals.len() - next_formal != 1 {
                return Err(Error::BadFormals);
            }
            let rest: Vector<LispyVal> = operands[next_operand..].iter().cloned().collect();
            local.define(formals[next_formal].clone(), LispyVal::QExpr(rest));
            next_formal += 1;
            next_operand = operands.len();
            break;
        }

        local.define(sym.clone(), operands[next_operand].clone());
        next_operand += 1;
    }

    // Operands ran out right before the variadic marker: it binds `{}`
    if next_formal < formals.len() && formals[next_formal].is_variadic_marker() {
        if formals.len() - next_formal != 2 {
            return Err(Error::BadFormals);
        }
        local.define(formals[next_formal + 1].clone(), LispyVal::empty_qexpr());
        next_formal = formals.len();
    }

    if next_formal == formals.len() {
        // Fully applied: re-parent the snapshot to the caller for the
        // duration of the body's evaluation
        local.set_parent(Some(caller.clone()));
        eval(&LispyVal::SExpr(lambda.body.clone()), &local)
    } else {
        // Partial application: the snapshot keeps the supplied bindings
        // and no parent
        Ok(LispyVal::Lambda(LispyLambda::new(
            Rc::new(local),
            formals[next_formal..].to_vec(),
            lambda.body.clone(),
        )))
    }
}

/// Construct a lambda value over a fresh, empty closure environment.
pub fn make_lambda(formals: Vec<Symbol>, body: Vector<LispyVal>) -> LispyVal {
    LispyVal::Lambda(LispyLambda::new(Rc::new(Env::new()), formals, body))
}
