use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::{Diagnostics, Error, ScanError};
use crate::literal::Literal;
use crate::token::{Token, Type};

pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    lexeme: String,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner.
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: vec![],
            lexeme: String::new(),
            line: 1,
        }
    }

    /// Scans the source code and returns a vector of tokens, terminated by
    /// exactly one `EOF` token.
    pub fn scan_tokens(&mut self, diagnostics: &mut Diagnostics) -> Vec<Token> {
        while !self.is_at_end() {
            self.lexeme.clear();
            self.scan_token(diagnostics);
        }

        self.tokens.push(Token::new(Type::EOF, String::new(), None, self.line));

        std::mem::take(&mut self.tokens)
    }

    /// Returns the next character without consuming it.
    fn peek(&mut self) -> char {
        self.source.peek().copied().unwrap_or('\0')
    }

    /// Returns the next next character without consuming it.
    fn peek_next(&mut self) -> char {
        self.source.peek_next().copied().unwrap_or('\0')
    }

    /// Returns if the scanner has reached the end of the file.
    fn is_at_end(&mut self) -> bool {
        self.source.peek().is_none()
    }

    /// Consumes and returns the next character, recording it in the
    /// current lexeme.
    fn advance(&mut self) -> char {
        let c = self.source.next().expect("tried to advance past end of source");
        self.lexeme.push(c);
        c
    }

    /// Consumes the next character if it matches `expected`.
    fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, r#type: Type, literal: Option<Literal>) {
        self.tokens.push(Token::new(r#type, self.lexeme.clone(), literal, self.line));
    }

    /// Handles a string literal. May span multiple lines; the literal
    /// payload excludes the surrounding quotes and is not escape-processed.
    fn string(&mut self, diagnostics: &mut Diagnostics) {
        let start_line = self.line;
        let mut value = String::new();

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            value.push(self.advance());
        }

        if self.is_at_end() {
            ScanError { line: start_line, message: "Unterminated string".to_string() }
                .report(diagnostics);
            return;
        }

        self.advance(); // closing quote

        self.add_token(Type::String, Some(Literal::String(value)));
    }

    /// Handles an integer or floating-point literal. A trailing `.` with no
    /// following digit is left unconsumed rather than treated as part of
    /// the number.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            is_float = true;
            self.advance(); // the dot

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        if is_float {
            let value: f64 = self.lexeme.parse().expect("scanned float to be well-formed");
            self.add_token(Type::Number, Some(Literal::Float(value)));
        } else {
            match self.lexeme.parse::<i64>() {
                Ok(value) => self.add_token(Type::Number, Some(Literal::Integer(value))),
                Err(_) => {
                    let value = self.lexeme.parse().unwrap_or(f64::INFINITY);
                    self.add_token(Type::Number, Some(Literal::Float(value)));
                }
            }
        }
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let r#type = match self.lexeme.as_str() {
            "and" => Type::And,
            "break" => Type::Break,
            "class" => Type::Class,
            "else" => Type::Else,
            "false" => Type::False,
            "for" => Type::For,
            "fun" => Type::Fun,
            "if" => Type::If,
            "nil" => Type::Nil,
            "or" => Type::Or,
            "print" => Type::Print,
            "return" => Type::Return,
            "super" => Type::Super,
            "this" => Type::This,
            "true" => Type::True,
            "var" => Type::Var,
            "while" => Type::While,
            _ => Type::Identifier,
        };

        self.add_token(r#type, None);
    }

    /// Scans the next token.
    fn scan_token(&mut self, diagnostics: &mut Diagnostics) {
        let c = self.advance();
        match c {
            '(' => self.add_token(Type::LeftParen, None),
            ')' => self.add_token(Type::RightParen, None),
            '{' => self.add_token(Type::LeftBrace, None),
            '}' => self.add_token(Type::RightBrace, None),
            ',' => self.add_token(Type::Comma, None),
            '.' => self.add_token(Type::Dot, None),
            '-' => self.add_token(Type::Minus, None),
            '+' => self.add_token(Type::Plus, None),
            ';' => self.add_token(Type::Semicolon, None),
            '*' => self.add_token(Type::Star, None),

            '!' => {
                let r#type = if self.advance_if('=') { Type::BangEqual } else { Type::Bang };
                self.add_token(r#type, None);
            }
            '=' => {
                let r#type = if self.advance_if('=') { Type::EqualEqual } else { Type::Equal };
                self.add_token(r#type, None);
            }
            '<' => {
                let r#type = if self.advance_if('=') { Type::LessEqual } else { Type::Less };
                self.add_token(r#type, None);
            }
            '>' => {
                let r#type = if self.advance_if('=') { Type::GreaterEqual } else { Type::Greater };
                self.add_token(r#type, None);
            }
            '/' => {
                if self.advance_if('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(Type::Slash, None);
                }
            }

            ' ' | '\r' | '\t' => {}

            '\n' => {
                self.line += 1;
            }

            '"' => self.string(diagnostics),

            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => {
                ScanError { line: self.line, message: format!("Unexpected character '{c}'") }
                    .report(diagnostics);
            }
        }
    }
}
