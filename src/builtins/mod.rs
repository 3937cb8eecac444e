//! Built-in primitives.
//!
//! Each builtin has signature `fn(&Rc<Environment>, Value) -> Value`: it
//! owns its already-evaluated argument s-expression and returns a result
//! Value directly, errors included. The fixed set of names registered below
//! is the whole native surface; everything else (`fun`, `not`, list helpers,
//! and so on) is ordinary Leesp code loaded from the prelude.

use crate::value::Value;
use std::rc::Rc;
use crate::env::Environment;

pub mod arithmetic;
pub mod comparison;
pub mod control;
pub mod definition;
pub mod equality;
pub mod errors;
pub mod io;
pub mod lists;

pub fn register_all(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    equality::register(env);
    lists::register(env);
    definition::register(env);
    control::register(env);
    io::register(env);
    errors::register(env);
}

/// Unwraps a builtin's argument Value into its item list. The Evaluator
/// always calls with an SExpr, but a caller applying a Builtin fetched out
/// of a Q-Expression elsewhere could hand over a QExpr instead; either way
/// the items are what we care about.
pub(crate) fn take_items(args: Value) -> Vec<Value> {
    match args {
        Value::SExpr(items) | Value::QExpr(items) => items,
        other => vec![other],
    }
}

pub(crate) fn type_error(name: &str, index: usize, got: &Value, expected: &str) -> Value {
    Value::Error(format!(
        "Function '{}' passed incorrect type for argument {}. Got {}, expected {}.",
        name,
        index,
        got.type_name(),
        expected
    ))
}

pub(crate) fn arity_error(name: &str, got: usize, expected: usize) -> Value {
    Value::Error(format!(
        "Function '{}' passed incorrect number of arguments. Got {}, expected {}.",
        name, got, expected
    ))
}

pub(crate) fn empty_error(name: &str, index: usize) -> Value {
    Value::Error(format!("Function '{}' passed {{}} for argument {}.", name, index))
}

pub(crate) fn expect_number(name: &str, index: usize, value: &Value) -> Result<i64, Value> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(type_error(name, index, other, "Number")),
    }
}

pub(crate) fn expect_qexpr(name: &str, index: usize, value: Value) -> Result<Vec<Value>, Value> {
    match value {
        Value::QExpr(items) => Ok(items),
        other => Err(type_error(name, index, &other, "Q-Expression")),
    }
}

pub(crate) fn expect_symbol(name: &str, index: usize, value: &Value) -> Result<String, Value> {
    match value {
        Value::Symbol(s) => Ok(s.clone()),
        other => Err(type_error(name, index, other, "Symbol")),
    }
}

pub(crate) fn expect_string(name: &str, index: usize, value: &Value) -> Result<String, Value> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(type_error(name, index, other, "String")),
    }
}
