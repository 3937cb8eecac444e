// ABOUTME: def, =, \ — binding and lambda construction

use super::{arity_error, take_items, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn define_many(name: &str, env: &Rc<Environment>, args: Value, global: bool) -> Value {
    let mut items = take_items(args);
    if items.is_empty() {
        return arity_error(name, 0, 1);
    }
    let names = match items.remove(0) {
        Value::QExpr(names) => names,
        other => return type_error(name, 0, &other, "Q-Expression"),
    };

    if names.len() != items.len() {
        return Value::Error(format!(
            "Function '{}' cannot define incorrect number of values to symbols. Received {} symbols but {} values",
            name,
            names.len(),
            items.len()
        ));
    }

    let mut symbols = Vec::with_capacity(names.len());
    for (i, n) in names.into_iter().enumerate() {
        match n {
            Value::Symbol(s) => symbols.push(s),
            other => return type_error(name, i, &other, "Symbol"),
        }
    }

    for (symbol, value) in symbols.into_iter().zip(items.into_iter()) {
        if global {
            env.def_global(symbol, value);
        } else {
            env.define(symbol, value);
        }
    }
    Value::sexpr()
}

pub fn def(env: &Rc<Environment>, args: Value) -> Value {
    define_many("def", env, args, true)
}

pub fn put(env: &Rc<Environment>, args: Value) -> Value {
    define_many("=", env, args, false)
}

pub fn lambda(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 2 {
        return arity_error("\\", items.len(), 2);
    }
    let formals = match &items[0] {
        Value::QExpr(formals) => formals,
        other => return type_error("\\", 0, other, "Q-Expression"),
    };
    for (i, formal) in formals.iter().enumerate() {
        if !matches!(formal, Value::Symbol(_)) {
            return type_error("\\", i, formal, "Symbol");
        }
    }
    if !matches!(&items[1], Value::QExpr(_)) {
        return type_error("\\", 1, &items[1], "Q-Expression");
    }

    let mut items = items;
    let body = items.pop().unwrap();
    let formals = items.pop().unwrap();
    Value::Lambda {
        formals: Box::new(formals),
        body: Box::new(body),
        env: Environment::new_detached(),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define("def", Value::Builtin(def));
    env.define("=", Value::Builtin(put));
    env.define("\\", Value::Builtin(lambda));
}
