//! Single-pass scanner turning a source string into a stream of [`Token`]s.

use log::trace;
use std::{iter::Peekable, str::Chars};

use crate::token::{lookup_ident, Token, TokenKind};

/// Scans a source string one character at a time, handing out tokens on demand.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<&char> {
        self.input.peek()
    }

    fn bump(&mut self) -> Option<char> {
        self.input.next()
    }

    fn eat_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Returns the next token. Repeated calls past the end of input keep returning `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.eat_whitespace();

        let Some(&ch) = self.peek() else {
            return Token::eof();
        };

        let token = match ch {
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ':' => self.single(TokenKind::Colon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            '=' => {
                self.bump();
                if self.peek() == Some(&'=') {
                    self.bump();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            '!' => {
                self.bump();
                if self.peek() == Some(&'=') {
                    self.bump();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            '"' => self.read_string(),
            c if c.is_ascii_alphabetic() => self.read_identifier(),
            c if c.is_ascii_digit() => self.read_number(),
            other => {
                self.bump();
                Token::new(TokenKind::Illegal, other.to_string())
            }
        };

        trace!("lexed {:?} {:?}", token.kind, token.literal);
        token
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let ch = self.bump().expect("single() called without a current char");
        Token::new(kind, ch.to_string())
    }

    fn read_string(&mut self) -> Token {
        self.bump(); // opening quote
        let mut literal = String::new();
        loop {
            match self.bump() {
                Some('"') | None => break,
                Some(c) => literal.push(c),
            }
        }
        Token::new(TokenKind::String, literal)
    }

    fn read_identifier(&mut self) -> Token {
        let mut literal = String::new();
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            literal.push(self.bump().unwrap());
        }
        let kind = lookup_ident(&literal);
        Token::new(kind, literal)
    }

    fn read_number(&mut self) -> Token {
        let mut literal = String::new();
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            literal.push(self.bump().unwrap());
        }
        Token::new(TokenKind::Int, literal)
    }
}
