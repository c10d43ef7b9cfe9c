use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A single lexical scope's variable bindings, linked to its enclosing
/// scope. Name resolution at runtime always goes through the resolver's
/// scope-distance side-table (`get_at`/`assign_at`); the name-walking
/// `get`/`assign` are kept only for globals and as a fallback.
#[derive(Debug)]
pub struct Environment {
    pub enclosing: Option<Rc<RefCell<Environment>>>,
    variables: HashMap<String, Object>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment { enclosing, variables: HashMap::new() }
    }

    pub fn define(&mut self, name: &str, value: Object) {
        self.variables.insert(name.to_string(), value);
    }

    /// Walks `distance` enclosing links up from `self`.
    fn ancestor(self_rc: &Rc<RefCell<Environment>>, distance: usize) -> Rc<RefCell<Environment>> {
        let mut environment = Rc::clone(self_rc);
        for _ in 0..distance {
            let parent = environment
                .borrow()
                .enclosing
                .clone()
                .expect("resolver-computed distance to stay within the environment chain");
            environment = parent;
        }
        environment
    }

    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.variables.contains_key(&name.lexeme) {
            self.variables.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError { token: name.clone(), message: format!("Undefined variable '{}'.", name.lexeme) })
    }

    pub fn assign_at(
        self_rc: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &Token,
        value: Object,
    ) {
        Environment::ancestor(self_rc, distance).borrow_mut().variables.insert(name.lexeme.clone(), value);
    }

    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(value) = self.variables.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError { token: name.clone(), message: format!("Undefined variable '{}'.", name.lexeme) })
    }

    pub fn get_at(
        self_rc: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &Token,
    ) -> Result<Object, RuntimeError> {
        Environment::ancestor(self_rc, distance)
            .borrow()
            .variables
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError {
                token: name.clone(),
                message: format!("Undefined variable '{}'.", name.lexeme),
            })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None)
    }
}
