//! The builtin shadow types over the concrete tuple type `Statement`.
//!
//! `Statement` has the fields `kind: StatementKind`, `expressions: array of
//! Expression`, `statements: array of Statement` and `conditions: array of
//! Expression`. Each shadow type names the slots of these arrays which are
//! meaningful for its kind of statement.

use crate::{Env, ScopeId, Type};

use super::{FieldStep, ShadowRef, ShadowTypeDef};

pub const STATEMENT: &str = "Statement";
pub const STATEMENT_KIND: &str = "StatementKind";
pub const EXPRESSION: &str = "Expression";

pub fn statement_type() -> Type {
    Type::named(STATEMENT)
}

pub fn statement_kind_type() -> Type {
    Type::enumeration(STATEMENT_KIND)
}

fn expression_type() -> Type {
    Type::named(EXPRESSION)
}

fn shadow(name: &str, discriminant: &str) -> ShadowTypeDef {
    ShadowTypeDef::new(name, STATEMENT, discriminant, statement_kind_type())
}

fn slot(array: &str, index: i64) -> [FieldStep; 2] {
    [FieldStep::field(array), FieldStep::Index(index)]
}

/// `Assignment`, discriminant `ASSIGN`: `lhs`, `rhs`
pub fn assignment() -> ShadowRef {
    shadow("Assignment", "ASSIGN")
        .field("lhs", slot("expressions", 0), expression_type())
        .field("rhs", slot("expressions", 1), expression_type())
        .into_ref()
}

/// `ExprStmt`, discriminant `EXPR`: `expression`
pub fn expr_stmt() -> ShadowRef {
    shadow("ExprStmt", "EXPR")
        .field("expression", slot("expressions", 0), expression_type())
        .into_ref()
}

/// `IfStatement`, discriminant `IF`: `condition`, `true_branch`, `false_branch`
pub fn if_statement() -> ShadowRef {
    shadow("IfStatement", "IF")
        .field("condition", slot("conditions", 0), expression_type())
        .field("true_branch", slot("statements", 0), statement_type())
        .field("false_branch", slot("statements", 1), statement_type())
        .into_ref()
}

/// `WhileStatement`, discriminant `WHILE`: `condition`, `body`
pub fn while_statement() -> ShadowRef {
    shadow("WhileStatement", "WHILE")
        .field("condition", slot("conditions", 0), expression_type())
        .field("body", slot("statements", 0), statement_type())
        .into_ref()
}

/// `ReturnStatement`, discriminant `RETURN`: `value`
pub fn return_statement() -> ShadowRef {
    shadow("ReturnStatement", "RETURN")
        .field("value", slot("expressions", 0), expression_type())
        .into_ref()
}

pub fn all() -> Vec<ShadowRef> {
    vec![assignment(), expr_stmt(), if_statement(), while_statement(), return_statement()]
}

/// Register `Statement`, its companion types and all its shadow types as type names in `scope`.
pub fn declare_statement_types(env: &mut Env, scope: ScopeId) {
    env.set_type(scope, STATEMENT, statement_type());
    env.set_type(scope, STATEMENT_KIND, statement_kind_type());
    env.set_type(scope, EXPRESSION, expression_type());
    for shadow in all() {
        env.set_type(scope, shadow.name().to_owned(), Type::Shadow(shadow));
    }
}

#[cfg(test)]
mod statements_tests {
    use super::*;

    #[test]
    fn family_shares_shadowed_type() {
        for shadow in all() {
            assert_eq!(shadow.shadowed_name(), STATEMENT);
            assert_eq!(shadow.shadowed_type(), statement_type());
            assert_eq!(shadow.discriminant_type(), statement_kind_type());
            assert_eq!(shadow.discriminant_field(), "kind");
        }
    }

    #[test]
    fn discriminants_are_distinct() {
        let mut discriminants: Vec<_> = all().iter().map(|s| s.discriminant().to_owned()).collect();
        discriminants.sort();
        discriminants.dedup();
        assert_eq!(discriminants.len(), all().len());
    }

    #[test]
    fn declared_types_resolve() {
        let mut env = Env::new();
        let global = env.global();
        declare_statement_types(&mut env, global);

        let typ = env.get_type(global, "IfStatement").unwrap();
        assert_eq!(typ.as_shadow().unwrap().discriminant(), "IF");
        assert_eq!(env.get_type(global, STATEMENT), Some(&statement_type()));
    }
}
