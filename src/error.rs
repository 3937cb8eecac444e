// ABOUTME: Host-level error types — parsing and file-loading failures

use thiserror::Error;

/// Failures from the grammar layer while turning source text into a
/// `ParseNode` tree. These never reach the evaluator directly; the `load`
/// builtin and the REPL driver convert them into user-facing text (or, for
/// `load`, a `Value::Error`) at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected trailing input: '{0}'")]
    TrailingInput(String),

    #[error("{0}")]
    Syntax(String),

    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// Failures surfaced by `load`-ing a file, whether from the filesystem or
/// from the grammar layer. Formats to the exact `load` error wording the
/// language spec requires: `Could not load library MSG`.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Could not load library {0}")]
    Io(String),

    #[error("Could not load library {0}")]
    Parse(#[from] ParseError),
}

impl LoadError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LoadError::Io(format!("{}: {}", path.display(), source))
    }
}
