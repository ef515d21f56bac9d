//! Built-in functions available in every [`crate::environment::Environment`]
//! without needing to be bound first.

use std::{cell::RefCell, io::Write, rc::Rc};

use log::debug;

use crate::{
    environment::Environment,
    object::{Value, NULL},
};

/// Looks up a builtin by name, for the evaluator to fall back to once an
/// identifier misses every enclosing scope.
pub fn lookup(name: &str) -> Option<Value> {
    let builtin = match name {
        "len" => builtin_len,
        "first" => builtin_first,
        "last" => builtin_last,
        "rest" => builtin_rest,
        "push" => builtin_push,
        "puts" => builtin_puts,
        _ => return None,
    };
    debug!("dispatching builtin `{name}`");
    Some(Value::Builtin(builtin))
}

fn wrong_arg_count(got: usize, want: usize) -> Value {
    Value::error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn builtin_len(args: &[Value], _env: &Rc<RefCell<Environment>>) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.chars().count() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!(
            "argument to `len` not supported, got {}",
            other.object_type()
        )),
    }
}

fn builtin_first(args: &[Value], _env: &Rc<RefCell<Environment>>) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or_else(|| NULL.clone()),
        other => Value::error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.object_type()
        )),
    }
}

fn builtin_last(args: &[Value], _env: &Rc<RefCell<Environment>>) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or_else(|| NULL.clone()),
        other => Value::error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.object_type()
        )),
    }
}

fn builtin_rest(args: &[Value], _env: &Rc<RefCell<Environment>>) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) if elements.is_empty() => NULL.clone(),
        Value::Array(elements) => Value::Array(Rc::new(elements[1..].to_vec())),
        other => Value::error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.object_type()
        )),
    }
}

fn builtin_push(args: &[Value], _env: &Rc<RefCell<Environment>>) -> Value {
    if args.len() != 2 {
        return wrong_arg_count(args.len(), 2);
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut next = elements.as_ref().clone();
            next.push(args[1].clone());
            Value::Array(Rc::new(next))
        }
        other => Value::error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.object_type()
        )),
    }
}

/// Writes each argument's `inspect()` rendering, one per line, to the calling
/// environment's sink (stdout at the root unless the embedder swapped it via
/// [`Environment::new_with_writer`]) rather than calling `println!` directly,
/// so evaluation can be tested without capturing process stdout.
fn builtin_puts(args: &[Value], env: &Rc<RefCell<Environment>>) -> Value {
    let writer = env.borrow().writer();
    let mut writer = writer.borrow_mut();
    for arg in args {
        let _ = writeln!(writer, "{arg}");
    }
    NULL.clone()
}
