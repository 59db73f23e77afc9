//! Traversal of the program tree.
//!
//! The child relation is defined once, by dispatching on the node kind in
//! [`NodeKind::children`]. Every traversal in the compiler is built on top of it.

use crate::*;

impl NodeKind {
    /// The direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Program(Program { stmts }) | NodeKind::Block(Block { stmts }) => {
                stmts.clone()
            }
            NodeKind::VarDecl(VarDecl { name, typ, init }) => {
                std::iter::once(*name).chain(*typ).chain(*init).collect()
            }
            NodeKind::Assign(Assign { lhs, rhs }) => vec![*lhs, *rhs],
            NodeKind::ExprStmt(ExprStmt { expr }) => vec![*expr],
            NodeKind::If(If { cond, then_branch, else_branch }) => {
                [*cond, *then_branch].into_iter().chain(*else_branch).collect()
            }
            NodeKind::Return(Return { value }) => value.iter().copied().collect(),
            NodeKind::Switch(Switch { scrutinee, cases, default }) => std::iter::once(*scrutinee)
                .chain(cases.iter().copied())
                .chain(*default)
                .collect(),
            NodeKind::Case(Case { label, body }) => vec![*label, *body],
            NodeKind::Visitor(Visitor { arms, wildcard }) => {
                arms.iter().copied().chain(*wildcard).collect()
            }
            NodeKind::Arm(Arm { component, body, .. }) => {
                component.iter().copied().chain(std::iter::once(*body)).collect()
            }
            NodeKind::Component(Component { name, typ }) => vec![*name, *typ],
            NodeKind::Function(Function { params, body }) => {
                params.iter().copied().chain(std::iter::once(*body)).collect()
            }
            NodeKind::Ident(_) | NodeKind::Literal(_) => vec![],
            NodeKind::Factor(Factor { operand, ops }) => {
                std::iter::once(*operand).chain(ops.iter().copied()).collect()
            }
            NodeKind::Selector(Selector { field }) => vec![*field],
            NodeKind::Index(Index { index }) => vec![*index],
            NodeKind::Call(Call { callee, args }) => {
                std::iter::once(*callee).chain(args.iter().copied()).collect()
            }
            NodeKind::Paren(Paren { inner }) => vec![*inner],
            NodeKind::Binary(Binary { lhs, rhs, .. }) => vec![*lhs, *rhs],
        }
    }

    /// A copy of this node kind with every child replaced by `f(child)`.
    ///
    /// Children are visited in the same order as by [`NodeKind::children`].
    pub fn map_children<F: FnMut(NodeId) -> NodeId>(&self, f: &mut F) -> NodeKind {
        match self {
            NodeKind::Program(Program { stmts }) => {
                NodeKind::Program(Program { stmts: stmts.iter().map(|s| f(*s)).collect() })
            }
            NodeKind::Block(Block { stmts }) => {
                NodeKind::Block(Block { stmts: stmts.iter().map(|s| f(*s)).collect() })
            }
            NodeKind::VarDecl(VarDecl { name, typ, init }) => {
                let name = f(*name);
                let typ = typ.map(&mut *f);
                let init = init.map(&mut *f);
                NodeKind::VarDecl(VarDecl { name, typ, init })
            }
            NodeKind::Assign(Assign { lhs, rhs }) => {
                let lhs = f(*lhs);
                NodeKind::Assign(Assign { lhs, rhs: f(*rhs) })
            }
            NodeKind::ExprStmt(ExprStmt { expr }) => {
                NodeKind::ExprStmt(ExprStmt { expr: f(*expr) })
            }
            NodeKind::If(If { cond, then_branch, else_branch }) => {
                let cond = f(*cond);
                let then_branch = f(*then_branch);
                let else_branch = else_branch.map(&mut *f);
                NodeKind::If(If { cond, then_branch, else_branch })
            }
            NodeKind::Return(Return { value }) => NodeKind::Return(Return { value: value.map(f) }),
            NodeKind::Switch(Switch { scrutinee, cases, default }) => {
                let scrutinee = f(*scrutinee);
                let cases = cases.iter().map(|c| f(*c)).collect();
                let default = default.map(&mut *f);
                NodeKind::Switch(Switch { scrutinee, cases, default })
            }
            NodeKind::Case(Case { label, body }) => {
                let label = f(*label);
                NodeKind::Case(Case { label, body: f(*body) })
            }
            NodeKind::Visitor(Visitor { arms, wildcard }) => {
                let arms = arms.iter().map(|a| f(*a)).collect();
                let wildcard = wildcard.map(&mut *f);
                NodeKind::Visitor(Visitor { arms, wildcard })
            }
            NodeKind::Arm(Arm { phase, component, body }) => {
                let component = component.map(&mut *f);
                NodeKind::Arm(Arm { phase: *phase, component, body: f(*body) })
            }
            NodeKind::Component(Component { name, typ }) => {
                let name = f(*name);
                NodeKind::Component(Component { name, typ: f(*typ) })
            }
            NodeKind::Function(Function { params, body }) => {
                let params = params.iter().map(|p| f(*p)).collect();
                NodeKind::Function(Function { params, body: f(*body) })
            }
            NodeKind::Ident(_) | NodeKind::Literal(_) => self.clone(),
            NodeKind::Factor(Factor { operand, ops }) => {
                let operand = f(*operand);
                NodeKind::Factor(Factor { operand, ops: ops.iter().map(|o| f(*o)).collect() })
            }
            NodeKind::Selector(Selector { field }) => {
                NodeKind::Selector(Selector { field: f(*field) })
            }
            NodeKind::Index(Index { index }) => NodeKind::Index(Index { index: f(*index) }),
            NodeKind::Call(Call { callee, args }) => {
                let callee = f(*callee);
                NodeKind::Call(Call { callee, args: args.iter().map(|a| f(*a)).collect() })
            }
            NodeKind::Paren(Paren { inner }) => NodeKind::Paren(Paren { inner: f(*inner) }),
            NodeKind::Binary(Binary { op, lhs, rhs }) => {
                let lhs = f(*lhs);
                NodeKind::Binary(Binary { op: *op, lhs, rhs: f(*rhs) })
            }
        }
    }
}

impl Tree {
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.kind(id).children()
    }

    /// `from` and all its descendants, parents before children.
    pub fn pre_order(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = vec![];
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        out
    }

    /// `from` and all its descendants, children before parents.
    pub fn post_order(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = vec![];
        self.post_order_into(from, &mut out);
        out
    }

    fn post_order_into(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            self.post_order_into(child, out);
        }
        out.push(id);
    }

    /// Whether `id` is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut curr = id;
        while let Some(parent) = self.parent(curr) {
            if !self.children(parent).contains(&curr) {
                return false;
            }
            curr = parent;
        }
        curr == self.root()
    }
}
