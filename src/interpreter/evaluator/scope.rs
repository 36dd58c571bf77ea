use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A lexical scope: a table of bindings plus a link to the enclosing scope.
///
/// Scopes form a parent-linked chain. Lookups and updates walk the chain
/// toward the root; declarations refuse names that are visible anywhere on
/// the chain. Closures keep their defining scope alive through the `Rc`.
#[derive(Debug, Default)]
pub struct Scope {
    vars:   RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Self>>,
}

impl Scope {
    /// Creates a fresh root scope with no parent.
    #[must_use]
    pub fn root() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a child scope whose lookups fall through to `self`.
    #[must_use]
    pub fn child(self: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { vars:   RefCell::new(HashMap::new()),
                       parent: Some(Rc::clone(self)), })
    }

    /// Whether `name` is bound in this scope or any enclosing one.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        let mut current = self;

        loop {
            if current.vars.borrow().contains_key(name) {
                return true;
            }

            match &current.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Introduces a new binding in this scope.
    ///
    /// # Errors
    /// Fails with [`RuntimeError::Redeclaration`] when the name is already
    /// visible from here, including bindings in enclosing scopes.
    pub fn declare(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if self.is_bound(name) {
            return Err(RuntimeError::Redeclaration { name: name.to_string(), line });
        }

        self.vars.borrow_mut().insert(name.to_string(), value);
        Ok(())
    }

    /// Binds `name` directly in this scope without the visibility check.
    ///
    /// Used for loop counters and function parameters, which intentionally
    /// shadow whatever the enclosing scopes hold.
    pub fn insert(&self, name: &str, value: Value) {
        self.vars.borrow_mut().insert(name.to_string(), value);
    }

    /// Rebinds the nearest visible binding of `name`.
    ///
    /// # Errors
    /// Fails with [`RuntimeError::UnknownVariable`] when no scope on the
    /// chain binds the name.
    pub fn update(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let mut current = self;

        loop {
            if current.vars.borrow().contains_key(name) {
                current.vars.borrow_mut().insert(name.to_string(), value);
                return Ok(());
            }

            match &current.parent {
                Some(parent) => current = parent,
                None => return Err(RuntimeError::UnknownVariable { name: name.to_string(), line }),
            }
        }
    }

    /// Resolves `name` against the nearest scope that binds it.
    ///
    /// # Errors
    /// Fails with [`RuntimeError::UnknownVariable`] when no scope on the
    /// chain binds the name.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        let mut current = self;

        loop {
            if let Some(value) = current.vars.borrow().get(name) {
                return Ok(value.clone());
            }

            match &current.parent {
                Some(parent) => current = parent,
                None => return Err(RuntimeError::UnknownVariable { name: name.to_string(), line }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scope;
    use crate::interpreter::value::core::Value;

    #[test]
    fn lookup_walks_the_chain() {
        let root = Scope::root();
        root.declare("x", Value::Number(1.0), 1).unwrap();

        let inner = root.child().child();
        assert_eq!(inner.lookup("x", 2).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn declare_rejects_names_visible_from_enclosing_scopes() {
        let root = Scope::root();
        root.declare("x", Value::Number(1.0), 1).unwrap();

        let inner = root.child();
        assert!(inner.declare("x", Value::Number(2.0), 2).is_err());
    }

    #[test]
    fn sibling_scopes_may_reuse_a_name() {
        let root = Scope::root();

        let left = root.child();
        left.declare("x", Value::Number(1.0), 1).unwrap();

        let right = root.child();
        right.declare("x", Value::Number(2.0), 2).unwrap();

        assert_eq!(left.lookup("x", 3).unwrap(), Value::Number(1.0));
        assert_eq!(right.lookup("x", 3).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn update_rebinds_the_nearest_binding() {
        let root = Scope::root();
        root.declare("x", Value::Number(1.0), 1).unwrap();

        let inner = root.child();
        inner.update("x", Value::Number(5.0), 2).unwrap();

        assert_eq!(root.lookup("x", 3).unwrap(), Value::Number(5.0));
    }

    #[test]
    fn update_of_an_unbound_name_fails() {
        let root = Scope::root();
        assert!(root.update("ghost", Value::Nothing, 1).is_err());
    }

    #[test]
    fn insert_shadows_without_complaint() {
        let root = Scope::root();
        root.declare("count", Value::Number(3.0), 1).unwrap();

        let inner = root.child();
        inner.insert("count", Value::Number(0.0));

        assert_eq!(inner.lookup("count", 2).unwrap(), Value::Number(0.0));
        assert_eq!(root.lookup("count", 2).unwrap(), Value::Number(3.0));
    }
}
