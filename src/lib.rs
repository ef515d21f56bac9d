//! Lexer, Pratt parser and tree-walking evaluator for a small dynamically
//! typed, expression-oriented language.
//!
//! The crate never initializes a logger itself; embedders wire up
//! [`log`](https://docs.rs/log) with whatever backend fits their binary (see
//! `demos/main.rs` for a `simple_logger`-based example).

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

use std::{cell::RefCell, rc::Rc};

use environment::Environment;
use lexer::Lexer;
use object::Value;
use parser::Parser;

/// Parses and evaluates `source` in a fresh top-level environment, returning
/// the resulting [`Value`] and any parse errors encountered along the way.
///
/// A non-empty error list means `source` failed to parse; the returned value
/// is then `Value::Null` and should be ignored.
pub fn eval_source(source: &str) -> (Value, Vec<String>) {
    let env = Environment::new();
    eval_source_in(source, &env)
}

/// Like [`eval_source`], but evaluates against a caller-supplied environment
/// so a host can keep bindings alive across multiple calls (a REPL, for
/// instance, though this crate does not provide one).
pub fn eval_source_in(source: &str, env: &Rc<RefCell<Environment>>) -> (Value, Vec<String>) {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return (object::NULL.clone(), parser.errors().to_vec());
    }

    (evaluator::eval_program(&program, env), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_source_reports_parse_errors() {
        let (_, errors) = eval_source("let = 5;");
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_eval_source_reuses_environment_across_calls() {
        let env = Environment::new();
        eval_source_in("let x = 5;", &env);
        let (value, errors) = eval_source_in("x + 1;", &env);
        assert!(errors.is_empty());
        assert!(matches!(value, Value::Integer(6)));
    }
}
