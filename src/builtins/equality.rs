// ABOUTME: ==, != over any two Values, via structural equality

use super::{arity_error, take_items};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn eq(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 2 {
        return arity_error("==", items.len(), 2);
    }
    Value::Number(if items[0] == items[1] { 1 } else { 0 })
}

pub fn neq(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 2 {
        return arity_error("!=", items.len(), 2);
    }
    Value::Number(if items[0] != items[1] { 1 } else { 0 })
}

pub fn register(env: &Rc<Environment>) {
    env.define("==", Value::Builtin(eq));
    env.define("!=", Value::Builtin(neq));
}
