// ABOUTME: list, head, tail, join, eval — Q-Expression primitives

use super::{arity_error, empty_error, take_items, type_error};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

pub fn list(_env: &Rc<Environment>, args: Value) -> Value {
    args.retype_to_qexpr()
}

pub fn head(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 1 {
        return arity_error("head", items.len(), 1);
    }
    match &items[0] {
        Value::QExpr(inner) if inner.is_empty() => empty_error("head", 0),
        Value::QExpr(inner) => Value::QExpr(vec![inner[0].clone()]),
        other => type_error("head", 0, other, "Q-Expression"),
    }
}

pub fn tail(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 1 {
        return arity_error("tail", items.len(), 1);
    }
    match &items[0] {
        Value::QExpr(inner) if inner.is_empty() => empty_error("tail", 0),
        Value::QExpr(inner) => Value::QExpr(inner[1..].to_vec()),
        other => type_error("tail", 0, other, "Q-Expression"),
    }
}

pub fn join(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.is_empty() {
        return arity_error("join", 0, 1);
    }
    let mut joined = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::QExpr(inner) => joined.extend(inner),
            other => return type_error("join", i, &other, "Q-Expression"),
        }
    }
    Value::QExpr(joined)
}

pub fn eval_builtin(env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 1 {
        return arity_error("eval", items.len(), 1);
    }
    match items.into_iter().next().unwrap() {
        Value::QExpr(inner) => eval(Value::SExpr(inner), env),
        other => type_error("eval", 0, &other, "Q-Expression"),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define("list", Value::Builtin(list));
    env.define("head", Value::Builtin(head));
    env.define("tail", Value::Builtin(tail));
    env.define("join", Value::Builtin(join));
    env.define("eval", Value::Builtin(eval_builtin));
}
