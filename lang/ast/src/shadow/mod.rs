//! # Shadow types
//!
//! A shadow type is a compile-time-only refinement of a concrete tuple type.
//! All values of the shadow types of one family share the runtime
//! representation of the shadowed concrete type and are told apart by its
//! discriminant field (`kind`). A shadow type offers virtual fields which do
//! not exist on the concrete type; [`ShadowType::lookup_codegen`] translates
//! an access to such a field into an expression on the concrete type.
//!
//! ## Example
//!
//! `IfStatement` shadows `Statement` with discriminant `IF`. For a binder
//! `node: IfStatement`, the access `node.condition` is translated to
//! `node.conditions[0]`, which is valid on `Statement`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use miette::Diagnostic;
use thiserror::Error;

use crate::{NodeId, ScopeId, Tree, Type};

mod def;
pub mod statements;

pub use def::*;

/// The name of the field holding the discriminant of a concrete tuple type.
pub const DISCRIMINANT_FIELD: &str = "kind";

pub trait ShadowType: fmt::Debug {
    /// The name of the shadow type itself, e.g. `IfStatement`.
    fn name(&self) -> &str;

    /// The name of the concrete type which is shadowed, e.g. `Statement`.
    fn shadowed_name(&self) -> &str;

    /// The concrete type which is shadowed.
    fn shadowed_type(&self) -> Type;

    /// The value of the discriminant field identifying this shadow type, e.g. `IF`.
    fn discriminant(&self) -> &str;

    /// The type of the discriminant field, e.g. the enumeration `StatementKind`.
    fn discriminant_type(&self) -> Type;

    fn discriminant_field(&self) -> &str {
        DISCRIMINANT_FIELD
    }

    /// Build the expression replacing the access `var.field`.
    ///
    /// The returned node is allocated in `tree` within `scope`, carries its
    /// resolved type and only mentions concrete types.
    fn lookup_codegen(
        &self,
        field: &str,
        var: &str,
        scope: ScopeId,
        tree: &mut Tree,
    ) -> Result<NodeId, LookupError>;
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Shadow type {shadow} has no field named {field}")]
    #[diagnostic(code("S-001"))]
    UnknownField { field: String, shadow: String },
}

/// A shared handle to a shadow type.
///
/// Two handles are equal if they refer to shadow types of the same name.
#[derive(Clone)]
pub struct ShadowRef(Rc<dyn ShadowType>);

impl ShadowRef {
    pub fn new<S: ShadowType + 'static>(shadow: S) -> Self {
        ShadowRef(Rc::new(shadow))
    }
}

impl Deref for ShadowRef {
    type Target = dyn ShadowType;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ShadowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShadowRef").field(&self.name()).finish()
    }
}

impl PartialEq for ShadowRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for ShadowRef {}

impl Hash for ShadowRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state)
    }
}
