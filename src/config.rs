// ABOUTME: Version info and REPL banner constants

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WELCOME_FOOTER: &str = "Press ctrl+c to exit";

pub fn welcome_message() -> String {
    format!("Leesp version {}", VERSION)
}

pub const PROMPT: &str = "leesp> ";

pub const HISTORY_FILE: &str = ".leesp_history";

pub const DEFAULT_PRELUDE: &str = include_str!("../prelude.lisp");
