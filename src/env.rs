// ABOUTME: Environment module for managing variable bindings and lexical scope

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A chained symbol→Value scope. The parent link is itself mutable: a
/// Lambda's own environment starts parentless, and gets its parent
/// temporarily pointed at the calling environment for the duration of a
/// call (see `crate::caller`). This is not an ownership cycle — the parent
/// link always points outward, toward an environment that outlives the
/// call — but it does mean environments need interior mutability on both
/// the bindings map and the parent link, not just the former.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates the root (global) environment: no parent, where builtins live
    /// and where `def` always writes.
    pub fn new_root() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates a fresh, empty, parentless environment — what a newly-created
    /// Lambda owns until its first call sets up a dynamic parent link.
    pub fn new_detached() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Points this environment's parent link at `parent`. Used by the Caller
    /// at application time; never used to build a permanent lexical chain.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Stores a copy of `value` under `name` in *this* scope, overwriting
    /// any existing binding of the same name.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Searches this scope, then parents, returning a copy of the stored
    /// Value, or an Error Value naming the unbound symbol.
    pub fn get(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.borrow().get(name) {
            return value.clone();
        }
        if let Some(parent) = self.parent.borrow().as_ref() {
            return parent.get(name);
        }
        Value::Error(format!("Unbound symbol '{}'", name))
    }

    /// Walks parent links to the root and defines `name` there.
    pub fn def_global(&self, name: impl Into<String>, value: Value) {
        if let Some(parent) = self.parent.borrow().as_ref() {
            parent.def_global(name, value);
        } else {
            self.define(name, value);
        }
    }

    /// Produces a new environment with the same parent link and deep copies
    /// of all bindings — used whenever a Value holding this environment
    /// (i.e. a Lambda) is itself copied, so the copy can't observe mutations
    /// made through the original.
    pub fn deep_copy(self: &Rc<Self>) -> Rc<Environment> {
        let bindings = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }
}
