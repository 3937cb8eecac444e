// ABOUTME: error — constructs an Error Value from a String argument

use super::{arity_error, take_items, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn error(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 1 {
        return arity_error("error", items.len(), 1);
    }
    match &items[0] {
        Value::String(msg) => Value::Error(msg.clone()),
        other => type_error("error", 0, other, "String"),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define("error", Value::Builtin(error));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wraps_message_literally() {
        let env = Environment::new_root();
        let args = Value::SExpr(vec![Value::String("boom".to_string())]);
        assert_eq!(error(&env, args), Value::Error("boom".to_string()));
    }

    #[test]
    fn test_error_requires_string() {
        let env = Environment::new_root();
        let args = Value::SExpr(vec![Value::Number(1)]);
        match error(&env, args) {
            Value::Error(msg) => assert!(msg.contains("incorrect type")),
            other => panic!("expected error, got {:?}", other),
        }
    }
}
