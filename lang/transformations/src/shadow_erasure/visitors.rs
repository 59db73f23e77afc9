use shade_lang_ast::shadow::ShadowRef;
use shade_lang_ast::*;

use super::util::*;
use crate::{ErasureError, ErasureResult};

/// Lower the shadow-typed arms of all visitor constructs in `tree`.
///
/// Constructs are lowered innermost first. For every construct, the shadow
/// arms are grouped into families by phase and shadowed type. Each family
/// becomes one `switch` on the discriminant which is appended to the body
/// of the concrete arm of the same phase and type. If no such arm exists, a
/// fresh one is synthesized; the construct's wildcard arm of the same phase
/// then becomes the default case of the switch and is removed.
pub fn lower_visitors(tree: &mut Tree) -> ErasureResult {
    let visitors: Vec<NodeId> = tree
        .post_order(tree.root())
        .into_iter()
        .filter(|id| matches!(tree.kind(*id), NodeKind::Visitor(_)))
        .collect();

    let mut lowered = 0;
    for visitor in visitors.iter().copied() {
        if lower_visitor(tree, visitor)? {
            lowered += 1;
        }
    }

    log::debug!(
        "Lowered {lowered} of {} visitor construct(s) in {}",
        visitors.len(),
        tree.uri
    );
    Ok(())
}

/// An arm whose binder has a shadow type.
struct ShadowArm {
    binder: String,
    /// The scope the binder is declared in; the body stays nested in it.
    scope: ScopeId,
    body: NodeId,
    shadow: ShadowRef,
}

/// The shadow arms of one construct with the same phase and shadowed type, in encounter order.
struct Family {
    phase: ArmPhase,
    shadowed_name: String,
    arms: Vec<ShadowArm>,
}

impl Family {
    fn first(&self) -> &ShadowArm {
        // Families are only created together with their first arm
        &self.arms[0]
    }
}

/// Returns whether the construct contained shadow arms.
fn lower_visitor(tree: &mut Tree, visitor: NodeId) -> ErasureResult<bool> {
    let Some(Visitor { arms, wildcard }) = tree.as_visitor(visitor).cloned() else {
        return Err(unexpected(tree, visitor, "visitor"));
    };

    let mut families: Vec<Family> = vec![];
    let mut kept = vec![];
    for arm in arms {
        let Some(Arm { phase, component, body }) = tree.as_arm(arm).cloned() else {
            return Err(unexpected(tree, arm, "visitor arm"));
        };
        let Some(component) = component else {
            return Err(ErasureError::impossible(
                "Found a visitor arm without a binder outside of the wildcard position",
                tree.span(arm),
            ));
        };
        let Some(shadow) = component_shadow(tree, component)? else {
            kept.push(arm);
            continue;
        };

        let Some(Component { name, .. }) = tree.as_component(component).cloned() else {
            return Err(unexpected(tree, component, "component"));
        };
        let shadow_arm = ShadowArm {
            binder: token_of(tree, name, "binder")?,
            scope: tree.scope(component),
            body,
            shadow,
        };
        match families
            .iter_mut()
            .find(|f| f.phase == phase && f.shadowed_name == shadow_arm.shadow.shadowed_name())
        {
            Some(family) => family.arms.push(shadow_arm),
            None => families.push(Family {
                phase,
                shadowed_name: shadow_arm.shadow.shadowed_name().to_owned(),
                arms: vec![shadow_arm],
            }),
        }
    }

    if families.is_empty() {
        return Ok(false);
    }

    let wildcard = match wildcard {
        Some(wildcard) => match tree.as_arm(wildcard) {
            Some(Arm { phase, body, .. }) => Some((*phase, *body)),
            None => return Err(unexpected(tree, wildcard, "wildcard arm")),
        },
        None => None,
    };
    let mut wildcard_consumed = false;
    let visitor_scope = tree.scope(visitor);

    for family in &families {
        let (binder, target, synthesized) =
            match find_concrete_arm(tree, &kept, family.phase, &family.shadowed_name)? {
                Some((binder, body)) => (binder, body, false),
                None => {
                    let (arm, body) = synthesize_arm(tree, family, visitor_scope);
                    kept.push(arm);
                    (family.first().binder.clone(), body, true)
                }
            };

        let default = match wildcard {
            Some((phase, body)) if synthesized && phase == family.phase => {
                wildcard_consumed = true;
                Some(tree.clone_subtree(body))
            }
            _ => None,
        };

        let scope = tree.scope(target);
        let switch = build_switch(tree, family, &binder, default, scope)?;
        if !tree.push_stmt(target, switch) {
            return Err(unexpected(tree, target, "block as arm body"));
        }
        // The binders are detached with their arms, the case bodies still resolve them
        for arm in &family.arms {
            tree.env.set(arm.scope, &arm.binder, arm.shadow.shadowed_type());
        }

        log::trace!(
            "Merged {} {} arm(s) of {} into a switch on {binder} ({})",
            family.arms.len(),
            family.phase,
            family.shadowed_name,
            if synthesized { "synthesized arm" } else { "existing arm" }
        );
    }

    for arm in kept.iter().copied() {
        tree.set_parent(arm, visitor);
    }
    if let Some(node) = tree.as_visitor_mut(visitor) {
        node.arms = kept;
        if wildcard_consumed {
            node.wildcard = None;
        }
    }
    Ok(true)
}

/// The shadow type of the binder `component`, if it has one.
fn component_shadow(tree: &Tree, component: NodeId) -> ErasureResult<Option<ShadowRef>> {
    match tree.as_component(component) {
        Some(Component { typ, .. }) => Ok(declared_shadow(tree, component, *typ)),
        None => Err(unexpected(tree, component, "component")),
    }
}

/// The binder name and body of the arm among `arms` binding the concrete type
/// `shadowed_name` in `phase`.
fn find_concrete_arm(
    tree: &Tree,
    arms: &[NodeId],
    phase: ArmPhase,
    shadowed_name: &str,
) -> ErasureResult<Option<(String, NodeId)>> {
    for arm in arms {
        let Some(Arm { phase: arm_phase, component: Some(component), body }) = tree.as_arm(*arm)
        else {
            continue;
        };
        if *arm_phase != phase {
            continue;
        }
        let Some(Component { name, typ }) = tree.as_component(*component) else {
            return Err(unexpected(tree, *component, "component"));
        };
        let binds_concrete = declared_type(tree, *component, *typ)
            .is_some_and(|declared| declared.is_named(shadowed_name));
        if binds_concrete {
            return Ok(Some((token_of(tree, *name, "binder")?, *body)));
        }
    }
    Ok(None)
}

/// A new arm `phase binder: Shadowed -> {}` binding the first binder name of `family`.
///
/// Returns the arm and its body.
fn synthesize_arm(tree: &mut Tree, family: &Family, visitor_scope: ScopeId) -> (NodeId, NodeId) {
    let first = family.first();
    let shadowed_type = first.shadow.shadowed_type();

    let scope = tree.env.child(visitor_scope);
    tree.env.declare(scope, first.binder.clone(), shadowed_type.clone());

    let name = tree.ident(first.binder.clone(), scope);
    let name = tree.with_typ(name, shadowed_type.clone());
    let typ = tree.ident(family.shadowed_name.clone(), scope);
    let typ = tree.with_typ(typ, shadowed_type.clone());
    let component = tree.alloc(NodeKind::Component(Component { name, typ }), scope);
    let component = tree.with_typ(component, shadowed_type);

    let body = tree.block(vec![], scope);
    let arm = tree.arm(family.phase, Some(component), body, visitor_scope);
    (arm, body)
}

/// `switch (binder.kind) { case D1: body1 ... }` with one case per arm of `family`.
///
/// The case bodies are the original arm bodies, moved without copying.
fn build_switch(
    tree: &mut Tree,
    family: &Family,
    binder: &str,
    default: Option<NodeId>,
    scope: ScopeId,
) -> ErasureResult<NodeId> {
    let shadow = &family.first().shadow;

    let var = tree.ident(binder, scope);
    let var = tree.with_typ(var, shadow.shadowed_type());
    let kind = tree.selector(shadow.discriminant_field(), scope);
    let scrutinee = tree.factor(var, vec![kind], scope);
    let scrutinee = tree.with_typ(scrutinee, shadow.discriminant_type());

    let mut cases = Vec::with_capacity(family.arms.len());
    for ShadowArm { body, shadow, .. } in &family.arms {
        let label = tree.ident(shadow.discriminant(), scope);
        let label = tree.with_typ(label, shadow.discriminant_type());
        cases.push(tree.case(label, *body, scope));
    }
    if cases.is_empty() {
        return Err(ErasureError::impossible(
            format!(
                "Cannot lower the {} arms of {} into a switch without cases",
                family.phase, family.shadowed_name
            ),
            None,
        ));
    }

    Ok(tree.switch(scrutinee, cases, default, scope))
}
