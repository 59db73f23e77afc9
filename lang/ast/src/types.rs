use std::fmt;

use crate::shadow::ShadowRef;

/// Types as assigned by the type checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Bool,
    String,
    /// A concrete tuple type, e.g. `Statement`
    Named(String),
    /// An enumeration, e.g. `StatementKind`
    Enum(String),
    Array(Box<Type>),
    Function,
    Visitor,
    /// A compile-time-only refinement of a concrete tuple type.
    Shadow(ShadowRef),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Type {
        Type::Named(name.into())
    }

    pub fn enumeration(name: impl Into<String>) -> Type {
        Type::Enum(name.into())
    }

    pub fn array(elem: Type) -> Type {
        Type::Array(Box::new(elem))
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self, Type::Shadow(_))
    }

    pub fn as_shadow(&self) -> Option<&ShadowRef> {
        match self {
            Type::Shadow(shadow) => Some(shadow),
            _ => None,
        }
    }

    /// The concrete type behind this type.
    ///
    /// Shadow types are replaced by the type they shadow; all other types are returned unchanged.
    pub fn erased(&self) -> Type {
        match self {
            Type::Shadow(shadow) => shadow.shadowed_type(),
            other => other.clone(),
        }
    }

    /// Whether this is the concrete tuple type with the given name.
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, Type::Named(n) if n == name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::Bool => f.write_str("bool"),
            Type::String => f.write_str("string"),
            Type::Named(name) | Type::Enum(name) => f.write_str(name),
            Type::Array(elem) => write!(f, "array of {elem}"),
            Type::Function => f.write_str("function"),
            Type::Visitor => f.write_str("visitor"),
            Type::Shadow(shadow) => f.write_str(shadow.name()),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use crate::shadow::statements;

    use super::*;

    #[test]
    fn erasing_concrete_type_is_identity() {
        assert_eq!(Type::named("Statement").erased(), Type::named("Statement"));
        assert_eq!(Type::array(Type::Int).erased(), Type::array(Type::Int));
    }

    #[test]
    fn erasing_shadow_type_yields_shadowed_type() {
        let typ = Type::Shadow(statements::if_statement());
        assert!(typ.is_shadow());
        assert_eq!(typ.erased(), Type::named("Statement"));
        assert_eq!(typ.to_string(), "IfStatement");
    }

    #[test]
    fn display() {
        assert_eq!(Type::array(Type::named("Expression")).to_string(), "array of Expression");
        assert_eq!(Type::enumeration("StatementKind").to_string(), "StatementKind");
    }
}
