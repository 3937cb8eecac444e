// ABOUTME: load, print — the only builtins that touch the outside world

use super::{arity_error, take_items, type_error};
use crate::driver;
use crate::env::Environment;
use crate::value::Value;
use std::path::Path;
use std::rc::Rc;

pub fn load(env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    if items.len() != 1 {
        return arity_error("load", items.len(), 1);
    }
    let path = match &items[0] {
        Value::String(s) => s.clone(),
        other => return type_error("load", 0, other, "String"),
    };

    match driver::load_source(Path::new(&path), env) {
        Ok(()) => Value::sexpr(),
        Err(e) => Value::Error(e.to_string()),
    }
}

pub fn print(_env: &Rc<Environment>, args: Value) -> Value {
    let items = take_items(args);
    let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Value::sexpr()
}

pub fn register(env: &Rc<Environment>) {
    env.define("load", Value::Builtin(load));
    env.define("print", Value::Builtin(print));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_errors() {
        let env = Environment::new_root();
        let args = Value::SExpr(vec![Value::String("/nonexistent/leesp-test-path.lsp".to_string())]);
        match load(&env, args) {
            Value::Error(msg) => assert!(msg.starts_with("Could not load library")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_print_returns_empty_sexpr() {
        let env = Environment::new_root();
        let args = Value::SExpr(vec![Value::Number(1), Value::Number(2)]);
        assert_eq!(print(&env, args), Value::sexpr());
    }
}
