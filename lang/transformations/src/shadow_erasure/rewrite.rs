use shade_lang_ast::*;

use super::util::*;
use crate::{ErasureError, ErasureResult};

/// Replace all remaining uses of shadow types in `tree` by concrete types.
///
/// Must run after [`super::lower_visitors`]. Rewrites
///
/// * field-access chains `x.f ...` on a shadow-typed variable `x`, where the
///   access `x.f` is replaced by the parenthesized concrete expression built
///   by the shadow type,
/// * binders `x: S` and declarations `x: S = e;`, where the shadow type name
///   `S` is replaced by the name of the type it shadows,
/// * the resolved type of every identifier with a shadow type.
pub fn rewrite(tree: &mut Tree) -> ErasureResult {
    let mut ctx = Ctx::default();

    // Children are looked up after their parent has been rewritten,
    // so nodes introduced by a rewrite are visited as well.
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        ctx.rewrite_node(tree, id)?;
        stack.extend(tree.children(id).into_iter().rev());
    }

    log::debug!(
        "Rewrote {} field access(es), {} binder(s), {} declaration(s) and {} identifier(s) in {}",
        ctx.chains,
        ctx.binders,
        ctx.decls,
        ctx.idents,
        tree.uri
    );
    Ok(())
}

/// Counts of rewritten nodes
#[derive(Debug, Default)]
struct Ctx {
    chains: usize,
    binders: usize,
    decls: usize,
    idents: usize,
}

impl Ctx {
    fn rewrite_node(&mut self, tree: &mut Tree, id: NodeId) -> ErasureResult {
        match tree.kind(id) {
            NodeKind::Factor(_) => self.rewrite_chain(tree, id),
            NodeKind::Component(_) => self.rewrite_component(tree, id),
            NodeKind::VarDecl(_) => self.rewrite_decl(tree, id),
            NodeKind::Ident(_) => {
                self.retype_ident(tree, id);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// `x.f.g` ~> `(lookup(x, f)).g` if `x` has a shadow type.
    ///
    /// Only the first selector is translated: the steps following it operate
    /// on the concrete type produced by the lookup. The chain is rewritten in
    /// place and its operand is no longer shadow-typed afterwards, so no chain
    /// is translated twice.
    fn rewrite_chain(&mut self, tree: &mut Tree, id: NodeId) -> ErasureResult {
        let Some(Factor { operand, ops }) = tree.as_factor(id).cloned() else {
            return Err(unexpected(tree, id, "field access chain"));
        };
        let Some(shadow) = tree.typ(operand).and_then(Type::as_shadow).cloned() else {
            return Ok(());
        };

        let Some(first) = ops.first().copied() else {
            return Err(ErasureError::impossible(
                format!(
                    "Found an empty field access chain on a value of shadow type {}",
                    shadow.name()
                ),
                tree.span(id),
            ));
        };
        let Some(Selector { field }) = tree.as_selector(first).cloned() else {
            return Ok(());
        };
        let field = token_of(tree, field, "selected field")?;
        let Some(var) = tree.token(operand).map(str::to_owned) else {
            return Err(ErasureError::impossible(
                format!(
                    "Expected a variable of shadow type {} at the root of a field access, \
                     found a {}",
                    shadow.name(),
                    tree.kind(operand).name()
                ),
                tree.span(operand),
            ));
        };

        let scope = tree.scope(id);
        let replacement = shadow
            .lookup_codegen(&field, &var, scope, tree)
            .map_err(|err| ErasureError::lookup(err, tree.span(first).or(tree.span(id))))?;
        let replacement_typ = tree.typ(replacement).cloned();
        let paren = tree.paren(replacement, scope);
        if let Some(typ) = &replacement_typ {
            tree.set_typ(paren, typ.clone());
        }

        let rest = ops[1..].to_vec();
        let chain_typ =
            if rest.is_empty() { replacement_typ } else { tree.typ(id).map(Type::erased) };
        if let Some(factor) = tree.as_factor_mut(id) {
            factor.operand = paren;
            factor.ops = rest;
        }
        tree.set_parent(paren, id);
        tree.node_mut(id).typ = chain_typ;

        log::trace!("Rewrote access {var}.{field} of shadow type {} at {id}", shadow.name());
        self.chains += 1;
        Ok(())
    }

    /// `x: S` ~> `x: T` where `S` shadows `T`.
    fn rewrite_component(&mut self, tree: &mut Tree, id: NodeId) -> ErasureResult {
        let Some(Component { name, typ }) = tree.as_component(id).cloned() else {
            return Err(unexpected(tree, id, "component"));
        };
        let Some(shadow) = declared_shadow(tree, id, typ) else {
            return Ok(());
        };

        if !tree.set_token(typ, shadow.shadowed_name()) {
            return Err(unexpected(tree, typ, "type name"));
        }
        let shadowed_type = shadow.shadowed_type();
        tree.set_typ(id, shadowed_type.clone());
        tree.set_typ(typ, shadowed_type.clone());
        tree.set_typ(name, shadowed_type.clone());

        let binder = token_of(tree, name, "binder")?;
        let scope = tree.scope(id);
        tree.env.set(scope, &binder, shadowed_type);

        log::trace!("Erased binder {binder}: {} to {}", shadow.name(), shadow.shadowed_name());
        self.binders += 1;
        Ok(())
    }

    /// `x: S = e;` ~> `x: T = e;` where `S` shadows `T`.
    ///
    /// Declarations without annotation only have their resolved type updated.
    fn rewrite_decl(&mut self, tree: &mut Tree, id: NodeId) -> ErasureResult {
        let Some(VarDecl { name, typ: annotation, .. }) = tree.as_var_decl(id).cloned() else {
            return Err(unexpected(tree, id, "variable declaration"));
        };
        let shadow = match annotation {
            Some(annotation) => declared_shadow(tree, id, annotation),
            None => tree.typ(id).and_then(Type::as_shadow).cloned(),
        };
        let Some(shadow) = shadow else {
            return Ok(());
        };

        let shadowed_type = shadow.shadowed_type();
        if let Some(annotation) = annotation {
            if !tree.set_token(annotation, shadow.shadowed_name()) {
                return Err(unexpected(tree, annotation, "type name"));
            }
            tree.set_typ(annotation, shadowed_type.clone());
        }
        tree.set_typ(id, shadowed_type.clone());
        tree.set_typ(name, shadowed_type.clone());

        let var = token_of(tree, name, "declared variable")?;
        let scope = tree.scope(id);
        tree.env.set(scope, &var, shadowed_type);

        log::trace!("Erased declaration of {var}: {} to {}", shadow.name(), shadow.shadowed_name());
        self.decls += 1;
        Ok(())
    }

    /// Bare uses of shadow-typed variables, e.g. `f(x)`.
    fn retype_ident(&mut self, tree: &mut Tree, id: NodeId) {
        let Some(typ) = tree.typ(id).filter(|typ| typ.is_shadow()).map(Type::erased) else {
            return;
        };
        tree.set_typ(id, typ);
        self.idents += 1;
    }
}
