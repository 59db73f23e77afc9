use shade_lang_printer::theme::ThemeExt;
use shade_lang_printer::tokens::*;
use shade_lang_printer::util::BlockExt;
use shade_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg, PrintInCtx};

use crate::*;

impl<'a> Print<'a> for Tree {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let stmts = self.program().stmts.iter().map(|stmt| print_node(self, *stmt, cfg, alloc));
        alloc.intersperse(stmts, alloc.hardline())
    }
}

impl<'a> PrintInCtx<'a> for NodeId {
    type Ctx = Tree;

    fn print_in_ctx(&'a self, cfg: &PrintCfg, ctx: &'a Tree, alloc: &'a Alloc<'a>) -> Builder<'a> {
        print_node(ctx, *self, cfg, alloc)
    }
}

fn print_node<'a>(tree: &'a Tree, id: NodeId, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
    let p = |id: NodeId| print_node(tree, id, cfg, alloc);
    match tree.kind(id) {
        NodeKind::Program(Program { stmts }) | NodeKind::Block(Block { stmts }) => {
            alloc.block(cfg, stmts.iter().map(|stmt| p(*stmt)).collect())
        }
        NodeKind::VarDecl(VarDecl { name, typ, init }) => {
            let name = p(*name);
            let decl = match (typ, init) {
                (Some(typ), Some(init)) => name
                    .append(COLON)
                    .append(alloc.space())
                    .append(print_type_name(tree, *typ, alloc))
                    .append(alloc.space())
                    .append(EQ)
                    .append(alloc.space())
                    .append(p(*init)),
                (Some(typ), None) => name
                    .append(COLON)
                    .append(alloc.space())
                    .append(print_type_name(tree, *typ, alloc)),
                (None, Some(init)) => name
                    .append(alloc.space())
                    .append(COLONEQ)
                    .append(alloc.space())
                    .append(p(*init)),
                (None, None) => name,
            };
            decl.append(SEMI)
        }
        NodeKind::Assign(Assign { lhs, rhs }) => p(*lhs)
            .append(alloc.space())
            .append(EQ)
            .append(alloc.space())
            .append(p(*rhs))
            .append(SEMI),
        NodeKind::ExprStmt(ExprStmt { expr }) => p(*expr).append(SEMI),
        NodeKind::If(If { cond, then_branch, else_branch }) => {
            let doc = alloc
                .keyword(IF)
                .append(alloc.space())
                .append(p(*cond).parens())
                .append(alloc.space())
                .append(p(*then_branch));
            match else_branch {
                Some(else_branch) => doc
                    .append(alloc.space())
                    .append(alloc.keyword(ELSE))
                    .append(alloc.space())
                    .append(p(*else_branch)),
                None => doc,
            }
        }
        NodeKind::Return(Return { value }) => match value {
            Some(value) => {
                alloc.keyword(RETURN).append(alloc.space()).append(p(*value)).append(SEMI)
            }
            None => alloc.keyword(RETURN).append(SEMI),
        },
        NodeKind::Switch(Switch { scrutinee, cases, default }) => {
            let mut items: Vec<_> = cases.iter().map(|case| p(*case)).collect();
            if let Some(default) = default {
                items.push(
                    alloc.keyword(DEFAULT).append(COLON).append(alloc.space()).append(p(*default)),
                );
            }
            alloc
                .keyword(SWITCH)
                .append(alloc.space())
                .append(p(*scrutinee).parens())
                .append(alloc.space())
                .append(alloc.block(cfg, items))
        }
        NodeKind::Case(Case { label, body }) => alloc
            .keyword(CASE)
            .append(alloc.space())
            .append(p(*label))
            .append(COLON)
            .append(alloc.space())
            .append(p(*body)),
        NodeKind::Visitor(Visitor { arms, wildcard }) => {
            let items = arms.iter().chain(wildcard.iter()).map(|arm| p(*arm)).collect();
            alloc.keyword(VISITOR).append(alloc.space()).append(alloc.block(cfg, items))
        }
        NodeKind::Arm(Arm { phase, component, body }) => {
            let phase = match phase {
                ArmPhase::Before => alloc.keyword(BEFORE),
                ArmPhase::After => alloc.keyword(AFTER),
            };
            let binder = match component {
                Some(component) => p(*component),
                None => alloc.text(UNDERSCORE),
            };
            phase
                .append(alloc.space())
                .append(binder)
                .append(alloc.space())
                .append(ARROW)
                .append(alloc.space())
                .append(p(*body))
        }
        NodeKind::Component(Component { name, typ }) => {
            p(*name).append(COLON).append(alloc.space()).append(print_type_name(tree, *typ, alloc))
        }
        NodeKind::Function(Function { params, body }) => {
            let params = alloc.comma_sep(params.iter().map(|param| p(*param)).collect());
            alloc.keyword(FUNCTION).append(params.parens()).append(alloc.space()).append(p(*body))
        }
        NodeKind::Ident(Ident { token }) => alloc.ident(token),
        NodeKind::Literal(literal) => match literal {
            Literal::Int(i) => alloc.literal(i.to_string()),
            Literal::Str(s) => alloc.literal(format!("\"{s}\"")),
            Literal::Bool(true) => alloc.keyword(TRUE),
            Literal::Bool(false) => alloc.keyword(FALSE),
        },
        NodeKind::Factor(Factor { operand, ops }) => {
            ops.iter().fold(p(*operand), |doc, op| doc.append(p(*op)))
        }
        NodeKind::Selector(Selector { field }) => alloc.text(DOT).append(p(*field)),
        NodeKind::Index(Index { index }) => p(*index).brackets(),
        NodeKind::Call(Call { callee, args }) => {
            let args = alloc.comma_sep(args.iter().map(|arg| p(*arg)).collect());
            p(*callee).append(args.parens())
        }
        NodeKind::Paren(Paren { inner }) => p(*inner).parens(),
        NodeKind::Binary(Binary { op, lhs, rhs }) => p(*lhs)
            .append(alloc.space())
            .append(op.symbol())
            .append(alloc.space())
            .append(p(*rhs)),
    }
}

/// Type annotations are identifiers naming a type.
fn print_type_name<'a>(tree: &'a Tree, id: NodeId, alloc: &'a Alloc<'a>) -> Builder<'a> {
    match tree.token(id) {
        Some(token) => alloc.typ(token),
        None => alloc.text(tree.kind(id).name()),
    }
}
