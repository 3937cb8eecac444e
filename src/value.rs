// ABOUTME: Value types representing Leesp data and expressions

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// A native primitive: takes the calling environment and an already-evaluated
/// argument list (an `SExpr`), and returns a result `Value` directly — errors
/// are data (`Value::Error`), never a Rust `Result`.
pub type BuiltinFn = fn(&Rc<Environment>, Value) -> Value;

#[derive(Debug)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    String(String),
    Builtin(BuiltinFn),
    Lambda {
        formals: Box<Value>,
        body: Box<Value>,
        env: Rc<Environment>,
    },
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
}

impl Value {
    pub fn sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Value {
        Value::QExpr(Vec::new())
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Builtin(_) | Value::Lambda { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Name used in error messages and the S-Expression head check. Builtins
    /// and Lambdas share the tag "Function": discrimination between the two
    /// sub-kinds happens by inspecting the variant directly, never by name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::Builtin(_) | Value::Lambda { .. } => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    /// Converts an owned SExpr/QExpr into a QExpr of the same children.
    pub fn retype_to_qexpr(self) -> Value {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Value::QExpr(items),
            other => other,
        }
    }

    /// Converts an owned SExpr/QExpr into an SExpr of the same children.
    pub fn retype_to_sexpr(self) -> Value {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Value::SExpr(items),
            other => other,
        }
    }
}

/// A Value is exclusively owned by one holder; sharing requires an explicit
/// deep structural copy, which is what `Clone` performs here. For a Lambda
/// this recursively copies its captured environment's bindings as well
/// (`Environment::deep_copy`), so no two live Values ever alias the same
/// mutable environment.
impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Error(s) => Value::Error(s.clone()),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::String(s) => Value::String(s.clone()),
            Value::Builtin(f) => Value::Builtin(*f),
            Value::Lambda { formals, body, env } => Value::Lambda {
                formals: formals.clone(),
                body: body.clone(),
                env: env.deep_copy(),
            },
            Value::SExpr(items) => Value::SExpr(items.clone()),
            Value::QExpr(items) => Value::QExpr(items.clone()),
        }
    }
}

/// Structural equality per the language spec: environments are never
/// compared (two lambdas with equal formals/body are equal regardless of
/// what they closed over), and a builtin equals another only if it is the
/// very same primitive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a as *const (), *b as *const ()),
            (
                Value::Lambda { formals: f1, body: b1, .. },
                Value::Lambda { formals: f2, body: b2, .. },
            ) => f1 == f2 && b1 == b2,
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Lambda { formals, body, .. } => write!(f, "(\\ {} {})", formals, body),
            Value::SExpr(items) => write_delimited(f, '(', items, ')'),
            Value::QExpr(items) => write_delimited(f, '{', items, '}'),
        }
    }
}

fn write_delimited(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", Value::Number(42)), "42");
        assert_eq!(format!("{}", Value::Number(-7)), "-7");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Value::Error("Division by zero!".to_string())),
            "Error: Division by zero!"
        );
    }

    #[test]
    fn test_string_display_escapes() {
        let s = Value::String("a\nb\t\"c\"\\d".to_string());
        assert_eq!(format!("{}", s), "\"a\\nb\\t\\\"c\\\"\\\\d\"");
    }

    #[test]
    fn test_sexpr_qexpr_display() {
        let sexpr = Value::SExpr(vec![Value::Number(1), Value::Number(2)]);
        assert_eq!(format!("{}", sexpr), "(1 2)");

        let qexpr = Value::QExpr(vec![Value::Symbol("a".into())]);
        assert_eq!(format!("{}", qexpr), "{a}");

        assert_eq!(format!("{}", Value::SExpr(vec![])), "()");
    }

    #[test]
    fn test_structural_equality() {
        let a = Value::QExpr(vec![Value::Number(1), Value::Number(2)]);
        let b = Value::QExpr(vec![Value::Number(1), Value::Number(2)]);
        assert_eq!(a, b);

        let c = Value::SExpr(vec![Value::Number(1), Value::Number(2)]);
        assert_ne!(a, c, "QExpr and SExpr of same contents are not equal");
    }

    #[test]
    fn test_builtin_equality_is_by_reference() {
        fn a(_e: &Rc<Environment>, args: Value) -> Value {
            args
        }
        fn b(_e: &Rc<Environment>, args: Value) -> Value {
            args
        }
        assert_eq!(Value::Builtin(a), Value::Builtin(a));
        assert_ne!(Value::Builtin(a), Value::Builtin(b));
    }

    #[test]
    fn test_lambda_equality_ignores_environment() {
        let env_a = Environment::new_root();
        let env_b = Environment::new_root();
        env_b.define("unrelated", Value::Number(99));

        let formals = Box::new(Value::QExpr(vec![Value::Symbol("x".into())]));
        let body = Box::new(Value::QExpr(vec![Value::Symbol("x".into())]));

        let l1 = Value::Lambda {
            formals: formals.clone(),
            body: body.clone(),
            env: env_a,
        };
        let l2 = Value::Lambda { formals, body, env: env_b };
        assert_eq!(l1, l2);
    }
}
