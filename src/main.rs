use std::cell::RefCell;
use std::io;
use std::process;
use std::rc::Rc;

use clap::Parser;

use lox_lang::Lox;

/// `lox [script]` — runs `script` (must end in `.lox` or `.pylox`) to
/// completion, or starts an interactive prompt if no script (or the
/// literal `rprompt`) is given.
#[derive(Parser)]
#[command(name = "lox", about = "Tree-walking interpreter for the Lox language.")]
struct Cli {
    path: Option<String>,
}

fn usage_error() -> i32 {
    eprintln!("Usage: lox [script]");
    lox_lang::EXIT_USAGE_ERROR
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => process::exit(usage_error()),
    };

    let out: Rc<RefCell<dyn io::Write>> = Rc::new(RefCell::new(io::stdout()));
    let mut lox = Lox::new(out);

    let code = match cli.path.as_deref() {
        None | Some("rprompt") => lox.run_prompt(),
        Some(path) if path.ends_with(".lox") || path.ends_with(".pylox") => lox.run_file(path),
        Some(_) => usage_error(),
    };

    process::exit(code);
}
