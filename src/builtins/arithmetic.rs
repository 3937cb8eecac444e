// ABOUTME: +, -, *, / over Numbers

use super::{arity_error, expect_number, take_items};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn fold(name: &str, args: Value, identity: i64, op: fn(i64, i64) -> i64) -> Value {
    let items = take_items(args);
    if items.is_empty() {
        return Value::Number(identity);
    }

    let mut acc = match expect_number(name, 0, &items[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };

    if items.len() == 1 {
        return Value::Number(op(identity, acc));
    }

    for (i, item) in items[1..].iter().enumerate() {
        let n = match expect_number(name, i + 1, item) {
            Ok(n) => n,
            Err(e) => return e,
        };
        acc = op(acc, n);
    }
    Value::Number(acc)
}

pub fn add(_env: &Rc<Environment>, args: Value) -> Value {
    fold("+", args, 0, |a, b| a + b)
}

pub fn sub(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.is_empty() {
        return arity_error("-", 0, 1);
    }
    let first = match expect_number("-", 0, &items[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if items.len() == 1 {
        return Value::Number(-first);
    }
    let mut acc = first;
    for (i, item) in items[1..].iter().enumerate() {
        let n = match expect_number("-", i + 1, item) {
            Ok(n) => n,
            Err(e) => return e,
        };
        acc -= n;
    }
    Value::Number(acc)
}

pub fn mul(_env: &Rc<Environment>, args: Value) -> Value {
    fold("*", args, 1, |a, b| a * b)
}

pub fn div(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.is_empty() {
        return arity_error("/", 0, 1);
    }
    let first = match expect_number("/", 0, &items[0]) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if items.len() == 1 {
        return Value::Number(first);
    }
    let mut acc = first;
    for (i, item) in items[1..].iter().enumerate() {
        let n = match expect_number("/", i + 1, item) {
            Ok(n) => n,
            Err(e) => return e,
        };
        if n == 0 {
            return Value::Error("Division by zero!".to_string());
        }
        acc /= n;
    }
    Value::Number(acc)
}

pub fn register(env: &Rc<Environment>) {
    env.define("+", Value::Builtin(add));
    env.define("-", Value::Builtin(sub));
    env.define("*", Value::Builtin(mul));
    env.define("/", Value::Builtin(div));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Rc<Environment> {
        Environment::new_root()
    }

    fn nums(xs: &[i64]) -> Value {
        Value::SExpr(xs.iter().map(|n| Value::Number(*n)).collect())
    }

    #[test]
    fn test_add_sums_all() {
        assert_eq!(add(&root(), nums(&[1, 2, 3])), Value::Number(6));
    }

    #[test]
    fn test_sub_negates_single_arg() {
        assert_eq!(sub(&root(), nums(&[10])), Value::Number(-10));
    }

    #[test]
    fn test_sub_folds_left_to_right() {
        assert_eq!(sub(&root(), nums(&[10, 3, 2])), Value::Number(5));
    }

    #[test]
    fn test_mul_identity_on_empty() {
        assert_eq!(mul(&root(), Value::SExpr(vec![])), Value::Number(1));
    }

    #[test]
    fn test_div_by_zero_errors() {
        assert_eq!(div(&root(), nums(&[10, 0])), Value::Error("Division by zero!".to_string()));
    }

    #[test]
    fn test_div_single_arg_returns_it_unchanged() {
        assert_eq!(div(&root(), nums(&[10])), Value::Number(10));
        assert_eq!(div(&root(), nums(&[0])), Value::Number(0));
    }

    #[test]
    fn test_div_folds() {
        assert_eq!(div(&root(), nums(&[100, 2, 5])), Value::Number(10));
    }

    #[test]
    fn test_type_mismatch_reports_index() {
        let args = Value::SExpr(vec![Value::Number(1), Value::String("a".into())]);
        let result = add(&root(), args);
        assert_eq!(
            result,
            Value::Error("Function '+' passed incorrect type for argument 1. Got String, expected Number.".to_string())
        );
    }
}
