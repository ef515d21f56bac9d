//! Lexical scope: a name-to-value mapping with an optional outer link.

use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::object::Value;

/// Where a top-level environment's `puts` output goes. Stored only on the
/// root frame; enclosed frames reach it by walking `outer`, the same way
/// `get` resolves a name.
pub type Sink = Rc<RefCell<dyn Write>>;

/// A single scope frame. Child frames hold a strong reference to their outer
/// frame; no frame ever holds a strong reference back down to a child, so the
/// environment graph is acyclic and ordinary `Rc` reference counting reclaims
/// it even when closures keep a frame alive past its defining call.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
    out: Option<Sink>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("store", &self.store)
            .field("outer", &self.outer)
            .field("out", &self.out.is_some())
            .finish()
    }
}

impl Environment {
    /// A root environment that writes `puts` output to stdout.
    pub fn new() -> Rc<RefCell<Environment>> {
        Self::new_with_writer(Rc::new(RefCell::new(io::stdout())))
    }

    /// A root environment with a caller-supplied sink, so tests can capture
    /// `puts` output instead of asserting against process stdout.
    pub fn new_with_writer(writer: Sink) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
            out: Some(writer),
        }))
    }

    /// A new scope nested inside `outer`, as created for each function call.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
            out: None,
        }))
    }

    /// Walks outward through enclosing scopes looking for `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds `name` in this scope only; never reaches into an outer scope.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// The sink `puts` writes to, resolved by walking up to the root frame.
    pub fn writer(&self) -> Sink {
        match &self.out {
            Some(sink) => sink.clone(),
            None => self
                .outer
                .as_ref()
                .expect("non-root environment without an outer frame")
                .borrow()
                .writer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_scope_shadows_outer() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));

        let inner = Environment::enclosed(outer.clone());
        inner.borrow_mut().set("x", Value::Integer(2));

        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(2))));
        assert!(matches!(outer.borrow().get("x"), Some(Value::Integer(1))));
    }

    #[test]
    fn test_inner_scope_sees_outer_binding() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(42));

        let inner = Environment::enclosed(outer);
        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(42))));
    }

    #[test]
    fn test_unbound_identifier_is_none() {
        let env = Environment::new();
        assert!(env.borrow().get("missing").is_none());
    }

    #[test]
    fn test_set_does_not_write_through_to_outer() {
        let outer = Environment::new();
        let inner = Environment::enclosed(outer.clone());
        inner.borrow_mut().set("y", Value::Integer(7));
        assert!(outer.borrow().get("y").is_none());
    }

    #[test]
    fn test_enclosed_scope_resolves_writer_from_root() {
        let root = Environment::new();
        let inner = Environment::enclosed(root.clone());
        // Just asserting this doesn't panic: an enclosed frame must resolve
        // the writer by walking up to the root rather than needing its own.
        let _ = inner.borrow().writer();
    }
}
