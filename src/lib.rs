#![allow(clippy::needless_return)]

//! Lox is a programming language written in Rust. It is a dynamically typed language with
//! lexical scoping, first-class functions and single inheritance. Lox is a tree-walk interpreter
//! with a hand-written recursive descent parser.
//!
//! Lox is a dynamically typed language. This means that the type of a variable is determined at
//! runtime. This is in contrast to statically typed languages, where the type of a variable is
//! determined at compile time. Dynamically typed languages are often easier to use, but are
//! generally slower than statically typed languages.
//!
//! Lox is a tree-walk interpreter. This means that the interpreter walks the abstract syntax tree
//! (AST) and evaluates each node. This is in contrast to a compiler, which would convert the AST
//! into bytecode or machine code. Tree-walk interpreters are generally easier to implement than
//! compilers, but are generally slower than compilers. This project is inspired by the
//! [Crafting Interpreters](https://craftinginterpreters.com/) book by Bob Nystrom.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of converting a string of
//! characters into a list of tokens. A token is a single unit of a programming language. For
//! example, the string `1 + 2` would be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as an iterator over the characters
//! in the source code.
//!
//! The scanner reports syntax errors in the source code as a [`ScanError`](error::ScanError).
//! Scan errors are reported as soon as they are encountered, but the scanner keeps going so the
//! user can see every syntax error in one pass instead of one at a time.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of converting a list of
//! tokens into an abstract syntax tree (AST). The parser is implemented in the [`parser`](parser)
//! module as a recursive descent parser. [`Expressions`](expr::Expr) are pieces of code that
//! produce a value, specifically an [`Object`](object::Object). [`Statements`](stmt::Stmt) are
//! pieces of code that perform some action instead of producing a value.
//!
//! The parser reports syntax errors in the source code as a [`ParseError`](error::ParseError) and,
//! like the scanner, synchronizes to the next statement boundary and keeps parsing instead of
//! aborting on the first error.
//!
//! ## Resolving
//! The third step in the interpreter is resolving. Resolving is a static pass over the AST that
//! determines, for every variable use, how many enclosing scopes separate it from its declaration.
//! The resolver is implemented in the [`resolver`](resolver) module and is run after the parser
//! because it needs the whole AST. The resolver reports semantically (but not syntactically)
//! invalid programs as a [`ResolveError`](error::ResolveError), for example:
//! ```text
//! {
//!    var a = 1;
//!    var a = 2;
//! }
//! ```
//!
//! ## Interpreting
//! The final step in the interpreter is _interpreting_: walking the AST and evaluating it. The
//! interpreter is implemented in the [`interpreter`](interpreter) module. The interpreter reports
//! errors as a [`RuntimeError`](error::RuntimeError) — the errors that can only be caught once the
//! code actually runs, for example:
//! ```text
//! var a = "123";
//! var b = a + 123;
//! ```
//! The interpreter manages variable scope through the [`environment`](environment) module, a chain
//! of hash maps linked to their enclosing scope.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::rc::Rc;

use rustyline::DefaultEditor;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::Diagnostics;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

pub const EXIT_USAGE_ERROR: i32 = 64;
pub const EXIT_COMPILE_ERROR: i32 = 65;
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// Owns the interpreter and its diagnostics sink for one process (or one
/// REPL session). `print` output and diagnostics share the same sink, so a
/// caller capturing output in a test sees both interleaved in source order.
pub struct Lox {
    interpreter: Interpreter,
    diagnostics: Diagnostics,
}

impl Lox {
    pub fn new(out: Rc<RefCell<dyn Write>>) -> Self {
        Lox { interpreter: Interpreter::new(Rc::clone(&out)), diagnostics: Diagnostics::new(out) }
    }

    /// Runs a script file to completion and returns the process exit code
    /// the caller should use (0 on success, 65 on a compile-time error, 70
    /// on a runtime error).
    pub fn run_file(&mut self, path: &str) -> i32 {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Failed to read '{path}': {error}");
                return EXIT_USAGE_ERROR;
            }
        };

        self.run(&contents);

        if self.diagnostics.had_error() {
            return EXIT_COMPILE_ERROR;
        }
        if self.diagnostics.had_runtime_error() {
            return EXIT_RUNTIME_ERROR;
        }

        0
    }

    /// Runs an interactive read-eval-print loop until the input stream is
    /// closed (Ctrl-D). Each line runs the full pipeline independently;
    /// an error on one line does not prevent the next line from running.
    pub fn run_prompt(&mut self) -> i32 {
        let mut editor = DefaultEditor::new().expect("failed to initialize line editor");

        while let Ok(line) = editor.readline("> ") {
            let _ = editor.add_history_entry(line.as_str());
            self.run(&line);
            self.diagnostics.reset();
        }

        0
    }

    /// Runs a source string directly, without touching the filesystem.
    /// Used by the integration test harness, which inlines Lox source
    /// instead of keeping golden script files on disk.
    pub fn run_source(&mut self, source: &str) -> i32 {
        self.run(source);

        if self.diagnostics.had_error() {
            return EXIT_COMPILE_ERROR;
        }
        if self.diagnostics.had_runtime_error() {
            return EXIT_RUNTIME_ERROR;
        }

        0
    }

    fn run(&mut self, source: &str) {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens(&mut self.diagnostics);

        if self.diagnostics.did_error() {
            return;
        }

        let mut parser = Parser::new(tokens, &mut self.diagnostics);
        let statements = parser.parse();

        if self.diagnostics.did_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter, &mut self.diagnostics);
        resolver.resolve(&statements);

        if self.diagnostics.did_error() {
            return;
        }

        self.interpreter.interpret(&statements, &mut self.diagnostics);
    }
}
