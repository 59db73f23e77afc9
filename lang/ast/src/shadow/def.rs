use crate::*;

use super::{LookupError, ShadowRef, ShadowType};

/// One step of the path from a bound variable to the concrete value behind a virtual field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStep {
    /// `.name`
    Field(String),
    /// `[i]`
    Index(i64),
}

impl FieldStep {
    pub fn field(name: impl Into<String>) -> FieldStep {
        FieldStep::Field(name.into())
    }
}

#[derive(Debug, Clone)]
struct VirtualField {
    name: String,
    path: Vec<FieldStep>,
    typ: Type,
}

/// A shadow type described by a table of virtual fields.
#[derive(Debug, Clone)]
pub struct ShadowTypeDef {
    name: String,
    shadowed_name: String,
    discriminant: String,
    discriminant_type: Type,
    fields: Vec<VirtualField>,
}

impl ShadowTypeDef {
    pub fn new(
        name: impl Into<String>,
        shadowed_name: impl Into<String>,
        discriminant: impl Into<String>,
        discriminant_type: Type,
    ) -> Self {
        ShadowTypeDef {
            name: name.into(),
            shadowed_name: shadowed_name.into(),
            discriminant: discriminant.into(),
            discriminant_type,
            fields: vec![],
        }
    }

    /// Declare the virtual field `name` of type `typ`, reached from the bound variable via `path`.
    pub fn field(
        mut self,
        name: impl Into<String>,
        path: impl IntoIterator<Item = FieldStep>,
        typ: Type,
    ) -> Self {
        self.fields.push(VirtualField { name: name.into(), path: path.into_iter().collect(), typ });
        self
    }

    pub fn into_ref(self) -> ShadowRef {
        ShadowRef::new(self)
    }

    /// Names of all virtual fields in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

impl ShadowType for ShadowTypeDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn shadowed_name(&self) -> &str {
        &self.shadowed_name
    }

    fn shadowed_type(&self) -> Type {
        Type::named(&self.shadowed_name)
    }

    fn discriminant(&self) -> &str {
        &self.discriminant
    }

    fn discriminant_type(&self) -> Type {
        self.discriminant_type.clone()
    }

    fn lookup_codegen(
        &self,
        field: &str,
        var: &str,
        scope: ScopeId,
        tree: &mut Tree,
    ) -> Result<NodeId, LookupError> {
        let Some(virtual_field) = self.fields.iter().find(|f| f.name == field) else {
            return Err(LookupError::UnknownField {
                field: field.to_owned(),
                shadow: self.name.clone(),
            });
        };

        let root = tree.ident(var, scope);
        let root = tree.with_typ(root, self.shadowed_type());
        if virtual_field.path.is_empty() {
            return Ok(root);
        }

        let ops = virtual_field
            .path
            .iter()
            .map(|step| match step {
                FieldStep::Field(name) => tree.selector(name, scope),
                FieldStep::Index(i) => {
                    let index = tree.literal(Literal::Int(*i), scope);
                    tree.index(index, scope)
                }
            })
            .collect();
        let factor = tree.factor(root, ops, scope);
        Ok(tree.with_typ(factor, virtual_field.typ.clone()))
    }
}

#[cfg(test)]
mod def_tests {
    use shade_lang_printer::PrintToStringInCtx;
    use url::Url;

    use super::*;

    fn point() -> ShadowTypeDef {
        ShadowTypeDef::new("Origin", "Point", "ORIGIN", Type::enumeration("PointKind"))
            .field("x", [FieldStep::field("coords"), FieldStep::Index(0)], Type::Int)
            .field("self", Vec::<FieldStep>::new(), Type::named("Point"))
    }

    #[test]
    fn lookup_builds_concrete_chain() {
        let mut tree = Tree::new(Url::parse("inmemory:///scratch.sh").unwrap());
        let scope = tree.env.global();
        let expr = point().lookup_codegen("x", "p", scope, &mut tree).unwrap();

        assert_eq!(expr.print_to_string_in_ctx(&tree), "p.coords[0]");
        assert_eq!(tree.typ(expr), Some(&Type::Int));
        let root = tree.as_factor(expr).unwrap().operand;
        assert_eq!(tree.typ(root), Some(&Type::named("Point")));
        assert_eq!(tree.parent(root), Some(expr));
    }

    #[test]
    fn empty_path_yields_variable() {
        let mut tree = Tree::new(Url::parse("inmemory:///scratch.sh").unwrap());
        let scope = tree.env.global();
        let expr = point().lookup_codegen("self", "p", scope, &mut tree).unwrap();
        assert_eq!(tree.token(expr), Some("p"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut tree = Tree::new(Url::parse("inmemory:///scratch.sh").unwrap());
        let scope = tree.env.global();
        let err = point().lookup_codegen("y", "p", scope, &mut tree).unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownField { field: "y".to_owned(), shadow: "Origin".to_owned() }
        );
        assert_eq!(err.to_string(), "Shadow type Origin has no field named y");
    }

    #[test]
    fn field_names_in_order() {
        assert_eq!(point().field_names().collect::<Vec<_>>(), vec!["x", "self"]);
    }
}
