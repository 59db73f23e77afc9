use shade_lang_ast::shadow::ShadowRef;
use shade_lang_ast::*;

use crate::ErasureError;

/// The declared type of a binder or declaration `owner` with the type annotation `annotation`.
///
/// The resolved type of the owner is preferred over the one of the annotation.
/// If neither is known, the written type name is looked up in the environment.
pub(super) fn declared_type(tree: &Tree, owner: NodeId, annotation: NodeId) -> Option<Type> {
    tree.typ(owner).or_else(|| tree.typ(annotation)).cloned().or_else(|| {
        let name = tree.token(annotation)?;
        tree.env.get_type(tree.scope(annotation), name).cloned()
    })
}

pub(super) fn declared_shadow(tree: &Tree, owner: NodeId, annotation: NodeId) -> Option<ShadowRef> {
    declared_type(tree, owner, annotation).and_then(|typ| typ.as_shadow().cloned())
}

/// The token of the identifier `id`, which occurs as `what`.
pub(super) fn token_of(tree: &Tree, id: NodeId, what: &str) -> Result<String, Box<ErasureError>> {
    tree.token(id).map(str::to_owned).ok_or_else(|| {
        ErasureError::impossible(
            format!("Expected an identifier as {what}, found a {}", tree.kind(id).name()),
            tree.span(id),
        )
    })
}

pub(super) fn unexpected(tree: &Tree, id: NodeId, expected: &str) -> Box<ErasureError> {
    ErasureError::impossible(
        format!("Expected a {expected}, found a {}", tree.kind(id).name()),
        tree.span(id),
    )
}
