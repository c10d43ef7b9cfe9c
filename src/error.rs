use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::token::{Token, Type};

/// Driver-owned diagnostic state, threaded by mutable reference through the
/// scanner, parser, resolver and interpreter. This replaces the teacher's
/// `static mut` pair (see spec's design notes: "pass a diagnostic sink
/// through the pipeline") with the same observable semantics, but without
/// `unsafe` and safe to reset between REPL lines.
///
/// `out` is shared (not owned outright) with the `Interpreter`'s `print`
/// output, since both land on the same stream (§6: "diagnostics in this
/// design go to stdout").
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
    out: Rc<RefCell<dyn Write>>,
}

impl Diagnostics {
    pub fn new(out: Rc<RefCell<dyn Write>>) -> Self {
        Diagnostics { had_error: false, had_runtime_error: false, out }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Checks if an error occurred during scanning, parsing, resolving, or
    /// evaluating.
    pub fn did_error(&self) -> bool {
        self.had_error || self.had_runtime_error
    }

    /// Resets the error flags. Used by the REPL between prompt lines.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    fn emit(&mut self, message: &str) {
        let _ = writeln!(self.out.borrow_mut(), "{message}");
    }
}

/// Every error type must implement this trait.
pub trait Error {
    /// Formats and emits the error through the diagnostics sink, and sets
    /// the appropriate flag.
    fn report(&self, diagnostics: &mut Diagnostics);
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn report(&self, diagnostics: &mut Diagnostics) {
        diagnostics.emit(&format!("[line {}] Error: {}", self.line, self.message));
        diagnostics.had_error = true;
    }
}

/// Returns the `<where>` fragment shared by parse and resolve diagnostics.
fn where_clause(token: &Token) -> String {
    if token.r#type == Type::EOF {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn report(&self, diagnostics: &mut Diagnostics) {
        diagnostics.emit(&format!(
            "[line {}] Error{}: {}",
            self.token.line,
            where_clause(&self.token),
            self.message,
        ));
        diagnostics.had_error = true;
    }
}

/// Represents an error that occurs during resolution.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn report(&self, diagnostics: &mut Diagnostics) {
        diagnostics.emit(&format!(
            "[line {}] Error{}: {}",
            self.token.line,
            where_clause(&self.token),
            self.message,
        ));
        diagnostics.had_error = true;
    }
}

/// Represents an error that occurs during evaluation.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn report(&self, diagnostics: &mut Diagnostics) {
        diagnostics.emit(&format!("[line {}] Runtime error: {}", self.token.line, self.message));
        diagnostics.had_runtime_error = true;
    }
}
