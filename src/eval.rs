// ABOUTME: Evaluator — reduces Value expressions against an Environment

use crate::caller::call;
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Reduces a single expression to its value.
///
/// Symbols resolve through `env`. S-Expressions evaluate every child
/// left to right, replacing each in place; the first child to evaluate
/// to an Error short-circuits the whole expression. An empty
/// S-Expression evaluates to itself; a one-element one evaluates to its
/// sole (already-evaluated) child. Otherwise the evaluated head must be
/// a function, applied to the remaining evaluated children via the
/// Caller. Everything else — numbers, strings, errors, Q-Expressions,
/// functions — is self-evaluating.
pub fn eval(expr: Value, env: &Rc<Environment>) -> Value {
    match expr {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(items) => eval_sexpr(items, env),
        other => other,
    }
}

fn eval_sexpr(items: Vec<Value>, env: &Rc<Environment>) -> Value {
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let v = eval(item, env);
        if v.is_error() {
            return v;
        }
        evaluated.push(v);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.into_iter().next().unwrap();
    }

    let mut rest = evaluated;
    let callee = rest.remove(0);
    if !callee.is_function() {
        return Value::Error(format!(
            "S-Expression starts with incorrect type. Got {}, expected {}.",
            callee.type_name(),
            "Function"
        ));
    }

    call(env, callee, Value::SExpr(rest))
}
