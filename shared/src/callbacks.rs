//! Named success callbacks for AJAX forms.
//!
//! A form opts in with `data-success-callback="name"`; the name is looked up
//! here instead of on the global object.

use std::{collections::HashMap, fmt, rc::Rc};

use serde_json::Value;

/// Handler invoked with the full JSON reply of a successful submission.
pub type SuccessCallback = Rc<dyn Fn(&Value)>;

/// Name to handler map.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    handlers: HashMap<String, SuccessCallback>,
}

impl CallbackRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, returning the handler it replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> Option<SuccessCallback>
    where
        F: Fn(&Value) + 'static,
    {
        self.handlers.insert(name.into(), Rc::new(handler))
    }

    /// Drop the handler registered under `name`.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    /// Clone out the handler for `name`.
    ///
    /// Callers holding the registry behind a `RefCell` should release the
    /// borrow before invoking, since a handler may register others.
    pub fn get(&self, name: &str) -> Option<SuccessCallback> {
        self.handlers.get(name).cloned()
    }

    /// Whether `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Invoke the handler for `name`. Returns `false` when nothing is
    /// registered under that name.
    pub fn invoke(&self, name: &str, payload: &Value) -> bool {
        match self.get(name) {
            Some(handler) => {
                handler(payload);
                true
            },
            None => false,
        }
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("CallbackRegistry").field("names", &names).finish()
    }
}
