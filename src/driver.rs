// ABOUTME: Driver — ties parser, reader, and evaluator together for a whole source

use crate::env::Environment;
use crate::error::LoadError;
use crate::eval::eval;
use crate::parser::parse_program;
use crate::reader::read_program;
use crate::value::Value;
use std::path::Path;
use std::rc::Rc;

/// Reads and evaluates every top-level form in `source`, in order, against
/// `env`. An Error result from any one form is printed and evaluation
/// continues with the next form. Used for `load`-ing a file full of
/// independent statements, each usually already its own parenthesized form.
pub fn run_source(source: &str, env: &Rc<Environment>) -> Result<(), LoadError> {
    let tree = parse_program(source)?;
    for form in read_program(&tree) {
        let result = eval(form, env);
        if result.is_error() {
            println!("{}", result);
        }
    }
    Ok(())
}

/// Reads a single REPL line and evaluates it as one expression: the root's
/// top-level forms are grouped into a single S-Expression before evaluating,
/// the same way the grammar's container-reading rule treats any other
/// s-expression — so a bare `+ 1 2 3` typed at the prompt is one function
/// call, not four separately-printed atoms. Returns the single resulting
/// Value (an Error is returned like any other result; the caller prints it
/// the same way).
pub fn eval_line(source: &str, env: &Rc<Environment>) -> Result<Value, LoadError> {
    let tree = parse_program(source)?;
    let forms = read_program(&tree);
    Ok(eval(Value::SExpr(forms), env))
}

/// Loads a file from disk and runs it. Used by both the `load` builtin and
/// the CLI's script-argument mode, so both report I/O and parse failures
/// identically.
pub fn load_source(path: &Path, env: &Rc<Environment>) -> Result<(), LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    run_source(&contents, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    fn root() -> Rc<Environment> {
        let env = Environment::new_root();
        builtins::register_all(&env);
        env
    }

    #[test]
    fn test_run_source_evaluates_each_form() {
        let env = root();
        run_source("(def {x} 10) (def {y} 20)", &env).unwrap();
        assert_eq!(env.get("x"), Value::Number(10));
        assert_eq!(env.get("y"), Value::Number(20));
    }

    #[test]
    fn test_run_source_continues_past_errors() {
        let env = root();
        run_source("(def {x} 1) undefined-symbol (def {y} 2)", &env).unwrap();
        assert_eq!(env.get("x"), Value::Number(1));
        assert_eq!(env.get("y"), Value::Number(2));
    }

    #[test]
    fn test_run_source_propagates_parse_error() {
        let env = root();
        assert!(run_source("(1 2", &env).is_err());
    }

    #[test]
    fn test_load_source_missing_file_is_io_error() {
        let env = root();
        let result = load_source(Path::new("/nonexistent/leesp-test-path.lsp"), &env);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_eval_line_groups_bare_tokens_into_one_call() {
        let env = root();
        assert_eq!(eval_line("+ 1 2 3", &env).unwrap(), Value::Number(6));
    }

    #[test]
    fn test_eval_line_returns_error_value_without_erring() {
        let env = root();
        assert_eq!(
            eval_line("foo", &env).unwrap(),
            Value::Error("Unbound symbol 'foo'".to_string())
        );
    }

    #[test]
    fn test_eval_line_propagates_parse_error() {
        let env = root();
        assert!(eval_line("(1 2", &env).is_err());
    }
}
