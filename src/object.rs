//! Runtime value model: every expression evaluates to one of these.

use std::{
    cell::RefCell,
    fmt::{self, Display},
    rc::Rc,
};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::{
    ast::{BlockStatement, Identifier},
    environment::Environment,
};

/// Signature of a builtin function. Takes the calling environment so `puts`
/// can reach the root frame's output sink without every other builtin
/// needing to care.
pub type BuiltinFn = fn(&[Value], &Rc<RefCell<Environment>>) -> Value;

/// A runtime value. Cloning is cheap: arrays, hashes, functions, and strings
/// are reference-counted internally where sharing matters (closures) or sized
/// to make an owned clone trivial.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Rc<Vec<Value>>),
    Hash(Rc<IndexMap<HashKey, (Value, Value)>>),
    Function(Rc<FunctionValue>),
    Builtin(BuiltinFn),
    ReturnValue(Box<Value>),
    Error(String),
}

#[derive(Debug)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

/// The subset of [`Value`] that can be used as a hash key: integers, booleans
/// and strings compare and hash by their underlying datum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl HashKey {
    pub fn from_value(value: &Value) -> Option<HashKey> {
        match value {
            Value::Integer(i) => Some(HashKey::Integer(*i)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String(s.to_string())),
            _ => None,
        }
    }
}

pub static NULL: Lazy<Value> = Lazy::new(|| Value::Null);
pub static TRUE: Lazy<Value> = Lazy::new(|| Value::Boolean(true));
pub static FALSE: Lazy<Value> = Lazy::new(|| Value::Boolean(false));

pub fn native_bool(value: bool) -> Value {
    if value {
        TRUE.clone()
    } else {
        FALSE.clone()
    }
}

impl Value {
    /// The stable type label used in error messages (`INTEGER`, `BOOLEAN`, …).
    pub fn object_type(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::String(s) => f.write_str(s),
            Value::Array(elements) => {
                let rendered = elements
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{rendered}]")
            }
            Value::Hash(pairs) => {
                let rendered = pairs
                    .values()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{rendered}}}")
            }
            Value::Function(func) => {
                let params = func
                    .parameters
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({params}){}", func.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::ReturnValue(value) => write!(f, "{value}"),
            Value::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
