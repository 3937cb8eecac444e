mod builtins;
mod caller;
mod config;
mod driver;
mod env;
mod error;
mod eval;
mod parser;
mod reader;
mod value;

use clap::Parser;
use env::Environment;
use rustyline::error::ReadlineError;
use rustyline::validate::MatchingBracketValidator;
use rustyline::{Config, Editor};
use rustyline_derive::{Completer, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct LeespHelper {
    #[rustyline(Validator)]
    validator: MatchingBracketValidator,
}

/// A small dynamically-typed Lisp interpreter.
#[derive(Parser, Debug)]
#[command(name = "leesp")]
#[command(version = config::VERSION)]
#[command(about = "A small dynamically-typed Lisp interpreter")]
struct CliArgs {
    /// Scripts to load and run. With none given, starts the REPL instead.
    #[arg(value_name = "FILE")]
    scripts: Vec<PathBuf>,

    /// Skip loading the standard prelude.
    #[arg(long = "no-prelude")]
    no_prelude: bool,

    /// Load a prelude from a custom path instead of the built-in one.
    #[arg(long = "prelude", value_name = "PATH")]
    prelude: Option<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new_root();
    builtins::register_all(&env);
    load_prelude(&args, &env);

    if args.scripts.is_empty() {
        run_repl(&env);
        return;
    }

    for script in &args.scripts {
        if let Err(e) = driver::load_source(script, &env) {
            eprintln!("{}", e);
        }
    }
}

fn load_prelude(args: &CliArgs, env: &Rc<Environment>) {
    if args.no_prelude {
        return;
    }
    if let Some(path) = &args.prelude {
        if let Err(e) = driver::load_source(path, env) {
            eprintln!("{}", e);
        }
        return;
    }
    if let Err(e) = driver::run_source(config::DEFAULT_PRELUDE, env) {
        eprintln!("{}", e);
    }
}

fn run_repl(env: &Rc<Environment>) {
    println!("{}", config::welcome_message());
    println!("{}", config::WELCOME_FOOTER);

    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl = match Editor::with_config(rl_config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize REPL: {}", e);
            return;
        }
    };
    rl.set_helper(Some(LeespHelper { validator: MatchingBracketValidator::new() }));
    let _ = rl.load_history(config::HISTORY_FILE);

    loop {
        match rl.readline(config::PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match driver::eval_line(&line, env) {
                    Ok(result) => println!("{}", result),
                    Err(e) => println!("Parse error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);
}
