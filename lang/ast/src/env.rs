//! The scope/type environment.
//!
//! Scopes are stored in an arena and nest lexically: every scope except the
//! global one has a parent. Each scope has two tables, one mapping variable
//! names to their types and one mapping type names to types.

use std::fmt;

use crate::{HashMap, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope {}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
struct Scope {
    parent: Option<ScopeId>,
    vars: HashMap<String, Type>,
    types: HashMap<String, Type>,
}

#[derive(Debug, Clone)]
pub struct Env {
    scopes: Vec<Scope>,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    /// An environment with a single, empty global scope.
    pub fn new() -> Self {
        Env { scopes: vec![Scope::default()] }
    }

    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Open a new scope nested in `parent`.
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(u32::try_from(self.scopes.len()).expect("more than u32::MAX scopes"));
        self.scopes.push(Scope { parent: Some(parent), ..Default::default() });
        id
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scope(scope).parent
    }

    /// Look up the type of the variable `name`, starting in `scope` and walking outwards.
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&Type> {
        self.find_var(scope, name).and_then(|found| self.scope(found).vars.get(name))
    }

    /// Bind `name` in exactly `scope`, shadowing outer bindings.
    pub fn declare(&mut self, scope: ScopeId, name: impl Into<String>, typ: Type) {
        self.scope_mut(scope).vars.insert(name.into(), typ);
    }

    /// Destructively update the type of `name`.
    ///
    /// The nearest binding visible from `scope` is overwritten. If `name` is
    /// not bound at all, it is bound in `scope`.
    pub fn set(&mut self, scope: ScopeId, name: &str, typ: Type) {
        let target = self.find_var(scope, name).unwrap_or(scope);
        self.scope_mut(target).vars.insert(name.to_owned(), typ);
    }

    /// Look up the type named `name`, starting in `scope` and walking outwards.
    pub fn get_type(&self, scope: ScopeId, name: &str) -> Option<&Type> {
        let mut curr = Some(scope);
        while let Some(id) = curr {
            if let Some(typ) = self.scope(id).types.get(name) {
                return Some(typ);
            }
            curr = self.scope(id).parent;
        }
        None
    }

    /// Register the type named `name` in `scope`.
    pub fn set_type(&mut self, scope: ScopeId, name: impl Into<String>, typ: Type) {
        self.scope_mut(scope).types.insert(name.into(), typ);
    }

    fn find_var(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut curr = Some(scope);
        while let Some(id) = curr {
            if self.scope(id).vars.contains_key(name) {
                return Some(id);
            }
            curr = self.scope(id).parent;
        }
        None
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0 as usize]
    }
}

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn lookup_walks_outwards() {
        let mut env = Env::new();
        let global = env.global();
        let inner = env.child(global);
        env.declare(global, "x", Type::Int);

        assert_eq!(env.get(inner, "x"), Some(&Type::Int));
        assert_eq!(env.get(inner, "y"), None);
        assert_eq!(env.parent(inner), Some(global));
        assert_eq!(env.parent(global), None);
    }

    #[test]
    fn declare_shadows_outer_binding() {
        let mut env = Env::new();
        let global = env.global();
        let inner = env.child(global);
        env.declare(global, "x", Type::Int);
        env.declare(inner, "x", Type::Bool);

        assert_eq!(env.get(inner, "x"), Some(&Type::Bool));
        assert_eq!(env.get(global, "x"), Some(&Type::Int));
    }

    #[test]
    fn set_updates_nearest_binding() {
        let mut env = Env::new();
        let global = env.global();
        let inner = env.child(global);
        env.declare(global, "x", Type::Int);

        env.set(inner, "x", Type::String);
        assert_eq!(env.get(global, "x"), Some(&Type::String));

        env.set(inner, "fresh", Type::Bool);
        assert_eq!(env.get(inner, "fresh"), Some(&Type::Bool));
        assert_eq!(env.get(global, "fresh"), None);
    }

    #[test]
    fn type_names_are_separate_from_variables() {
        let mut env = Env::new();
        let global = env.global();
        let inner = env.child(global);
        env.set_type(global, "Statement", Type::named("Statement"));

        assert_eq!(env.get_type(inner, "Statement"), Some(&Type::named("Statement")));
        assert_eq!(env.get(inner, "Statement"), None);
    }
}
