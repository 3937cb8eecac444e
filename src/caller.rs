// ABOUTME: Caller — applies a Builtin or Lambda to an already-evaluated argument list

use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// Applies `callee` (already checked to be a function) to `args` (an
/// already-evaluated SExpr). A Builtin is invoked directly. A Lambda binds
/// its formals one at a time against `args`:
///
/// - a plain symbol formal consumes one argument;
/// - `&` consumes no argument itself and binds the *next* formal to the
///   remaining arguments wrapped as a Q-Expression (possibly empty);
/// - running out of arguments with formals left returns a partially
///   applied copy of the lambda (its own formals list shortened to what's
///   still unbound);
/// - supplying more arguments than formals (once `&` isn't in play) is an
///   arity error.
///
/// Once every formal is bound, the lambda's environment is parented to
/// `caller_env` for the duration of evaluating its body, then the body is
/// evaluated in it.
pub fn call(caller_env: &Rc<Environment>, callee: Value, args: Value) -> Value {
    match callee {
        Value::Builtin(f) => f(caller_env, args),
        Value::Lambda { formals, body, env } => call_lambda(caller_env, formals, body, env, args),
        other => Value::Error(format!("'{}' is not callable", other.type_name())),
    }
}

fn call_lambda(
    caller_env: &Rc<Environment>,
    formals: Box<Value>,
    body: Box<Value>,
    env: Rc<Environment>,
    args: Value,
) -> Value {
    let mut formals = match *formals {
        Value::QExpr(items) => items,
        other => vec![other],
    };
    let mut args = match args {
        Value::SExpr(items) | Value::QExpr(items) => items,
        other => vec![other],
    };
    let total_formals = formals.len();
    let given_args = args.len();

    while !args.is_empty() {
        if formals.is_empty() {
            return Value::Error(format!(
                "Function passed too many arguments. Got {}, expected {}.",
                given_args, total_formals
            ));
        }

        let formal_name = match formals.remove(0) {
            Value::Symbol(name) => name,
            _ => return Value::Error("Function formal must be a symbol.".to_string()),
        };

        if formal_name == "&" {
            if formals.len() != 1 {
                return Value::Error(
                    "Function format invalid. Symbol '&' not followed by single symbol.".to_string(),
                );
            }
            let rest_name = match formals.remove(0) {
                Value::Symbol(name) => name,
                _ => return Value::Error("Function formal must be a symbol.".to_string()),
            };
            env.define(rest_name, Value::QExpr(args));
            args = Vec::new();
            break;
        }

        let arg = args.remove(0);
        env.define(formal_name, arg);
    }

    // `&` with nothing left to bind: bind an empty Q-Expression.
    if formals.first().map(|v| matches!(v, Value::Symbol(s) if s == "&")) == Some(true) {
        if formals.len() != 2 {
            return Value::Error(
                "Function format invalid. Symbol '&' not followed by single symbol.".to_string(),
            );
        }
        formals.remove(0);
        let rest_name = match formals.remove(0) {
            Value::Symbol(name) => name,
            _ => return Value::Error("Function formal must be a symbol.".to_string()),
        };
        env.define(rest_name, Value::qexpr());
    }

    if formals.is_empty() {
        env.set_parent(caller_env.clone());
        eval((*body).clone().retype_to_sexpr(), &env)
    } else {
        Value::Lambda { formals: Box::new(Value::QExpr(formals)), body, env }
    }
}
