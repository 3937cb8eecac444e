// ABOUTME: <, >, <=, >= over exactly two Numbers

use super::{arity_error, expect_number, take_items};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn ordering(name: &str, args: Value, op: fn(i64, i64) -> bool) -> Value {
    let items = take_items(args);
    if items.len() != 2 {
        return arity_error(name, items.len(), 2);
    }
    let a = match expect_number(name, 0, &items[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    let b = match expect_number(name, 1, &items[1]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    Value::Number(if op(a, b) { 1 } else { 0 })
}

pub fn lt(_env: &Rc<Environment>, args: Value) -> Value {
    ordering("<", args, |a, b| a < b)
}

pub fn gt(_env: &Rc<Environment>, args: Value) -> Value {
    ordering(">", args, |a, b| a > b)
}

pub fn le(_env: &Rc<Environment>, args: Value) -> Value {
    ordering("<=", args, |a, b| a <= b)
}

pub fn ge(_env: &Rc<Environment>, args: Value) -> Value {
    ordering(">=", args, |a, b| a >= b)
}

pub fn register(env: &Rc<Environment>) {
    env.define("<", Value::Builtin(lt));
    env.define(">", Value::Builtin(gt));
    env.define("<=", Value::Builtin(le));
    env.define(">=", Value::Builtin(ge));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Rc<Environment> {
        Environment::new_root()
    }

    fn nums(a: i64, b: i64) -> Value {
        Value::SExpr(vec![Value::Number(a), Value::Number(b)])
    }

    #[test]
    fn test_lt_true_and_false() {
        assert_eq!(lt(&root(), nums(1, 2)), Value::Number(1));
        assert_eq!(lt(&root(), nums(2, 1)), Value::Number(0));
    }

    #[test]
    fn test_ge_equal_is_true() {
        assert_eq!(ge(&root(), nums(5, 5)), Value::Number(1));
    }

    #[test]
    fn test_wrong_arity() {
        let args = Value::SExpr(vec![Value::Number(1)]);
        assert_eq!(
            lt(&root(), args),
            Value::Error("Function '<' passed incorrect number of arguments. Got 1, expected 2.".to_string())
        );
    }
}
