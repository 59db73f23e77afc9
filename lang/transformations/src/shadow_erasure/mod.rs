//! # Shadow type erasure
//!
//! Removes every trace of shadow types from a type-checked program tree, so
//! that later phases only ever see concrete types. Erasure consists of two
//! passes which must run in this order:
//!
//! 1. [`lower_visitors`] collapses the shadow-typed arms of each visitor
//!    construct into a `switch` on the discriminant, placed under the arm
//!    for the shadowed concrete type.
//! 2. [`rewrite`] translates accesses to virtual fields into expressions on
//!    the concrete type and replaces shadow type annotations of binders and
//!    declarations by the shadowed type.
//!
//! ## Example
//!
//! ```text
//! visitor {                                  visitor {
//!     before node: Assignment -> {               before node: Statement -> {
//!         f(node.lhs);                               switch (node.kind) {
//!     }                               ==>                case ASSIGN: {
//! }                                                          f((node.expressions[0]));
//!                                                        }
//!                                                    }
//!                                                }
//!                                            }
//! ```
//!
//! The tree is mutated in place. An error aborts erasure and leaves the tree
//! partially rewritten.

mod rewrite;
mod util;
mod verify;
mod visitors;

use shade_lang_ast::Tree;

use crate::{ErasureError, ErasureResult};

pub use rewrite::rewrite;
pub use verify::find_shadow_residue;
pub use visitors::lower_visitors;

/// Erase all shadow types in `tree`.
///
/// Fails with [`ErasureError::UnknownShadowField`] if a virtual field does
/// not exist and with [`ErasureError::Impossible`] if the tree is malformed.
pub fn erase_shadow_types(tree: &mut Tree) -> ErasureResult {
    log::debug!("Erasing shadow types in {}", tree.uri);

    lower_visitors(tree)?;
    rewrite(tree)?;

    let residue = find_shadow_residue(tree);
    if let Some(first) = residue.first() {
        return Err(ErasureError::impossible(
            format!(
                "{} shadow type occurrence(s) survived erasure, the first one is a {} ({first})",
                residue.len(),
                tree.kind(*first).name()
            ),
            tree.span(*first),
        ));
    }
    Ok(())
}
