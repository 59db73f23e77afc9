use shade_lang_ast::*;

/// All nodes reachable from the root which still mention a shadow type.
///
/// A node mentions a shadow type if its resolved type is one, if it is an
/// identifier naming a shadow type registered in the environment, or if it
/// refers to a variable whose binding has a shadow type.
/// The result is empty after successful erasure.
pub fn find_shadow_residue(tree: &Tree) -> Vec<NodeId> {
    tree.pre_order(tree.root())
        .into_iter()
        .filter(|id| {
            tree.typ(*id).is_some_and(Type::is_shadow)
                || names_shadow_type(tree, *id)
                || binds_shadow_var(tree, *id)
        })
        .collect()
}

fn names_shadow_type(tree: &Tree, id: NodeId) -> bool {
    tree.token(id).is_some_and(|token| {
        tree.env.get_type(tree.scope(id), token).is_some_and(Type::is_shadow)
    })
}

/// Field names and case labels are not variable references.
fn binds_shadow_var(tree: &Tree, id: NodeId) -> bool {
    let Some(token) = tree.token(id) else {
        return false;
    };
    let is_reference = match tree.parent(id).map(|parent| tree.kind(parent)) {
        Some(NodeKind::Selector(_)) => false,
        Some(NodeKind::Case(Case { label, .. })) => *label != id,
        _ => true,
    };
    is_reference && tree.env.get(tree.scope(id), token).is_some_and(Type::is_shadow)
}
